//! Fragment templates for generated regions.

use minijinja::Environment;

/// Template engine holding the built-in fragment templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("badge.html".to_string(), BADGE_TEMPLATE.to_string())
            .expect("Failed to add badge template");

        env.add_template_owned("card.html".to_string(), CARD_TEMPLATE.to_string())
            .expect("Failed to add card template");

        Self { env }
    }

    pub fn render(
        &self,
        template: &str,
        ctx: minijinja::Value,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;
        tmpl.render(ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BADGE_TEMPLATE: &str = r#"<span class="px-4 py-2 rounded-full text-sm bg-gradient-to-r from-indigo-600/30 to-purple-600/30 hover:from-indigo-600/50 hover:to-purple-600/50 transition-all duration-300 border border-indigo-500/30 hover:border-indigo-500/60 cursor-pointer transform hover:scale-105 skill-animation" style="animation-delay: {{ delay_ms }}ms">{{ skill }}</span>"#;

const CARD_TEMPLATE: &str = r##"<div class="bg-gray-800 rounded-3xl glass card-hover group overflow-hidden project-animation" style="animation-delay: {{ delay_ms }}ms">
  <div class="relative overflow-hidden">
    <img src="{{ image }}" alt="{{ title }} screenshot" class="w-full h-56 object-cover group-hover:scale-110 transition-transform duration-500" onerror="this.src='{{ placeholder }}'">
    <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
    {%- if link %}
    <div class="absolute top-4 right-4 w-10 h-10 bg-white/20 backdrop-blur-sm rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-all duration-300 transform translate-x-2 group-hover:translate-x-0">
      <svg class="w-5 h-5 text-white" fill="none" stroke="currentColor" viewBox="0 0 24 24">
        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"></path>
      </svg>
    </div>
    {%- endif %}
  </div>
  <div class="p-6">
    <div class="flex items-start justify-between mb-3">
      <h3 class="font-bold text-xl group-hover:text-indigo-400 transition-colors">{{ title }}</h3>
      {%- if status %}
      <span class="text-xs px-2 py-1 rounded-full {{ status_classes }} border">{{ status }}</span>
      {%- endif %}
    </div>
    <p class="opacity-80 text-sm leading-relaxed mb-6">{{ description }}</p>
    <div class="flex gap-2 flex-wrap mb-6">
      {%- for tech in technologies %}
      <span class="text-xs px-3 py-1 rounded-full bg-gradient-to-r from-indigo-500/20 to-purple-500/20 border border-indigo-500/30 hover:border-indigo-500 transition-colors">{{ tech }}</span>
      {%- endfor %}
    </div>
    {%- if link %}
    <a href="{{ link }}" target="_blank" class="group/btn w-full flex items-center justify-center gap-2 py-3 px-4 rounded-xl bg-gradient-to-r from-indigo-600 to-purple-600 hover:from-indigo-500 hover:to-purple-500 transition-all duration-300 font-medium transform hover:scale-105">
      <span>View Project</span>
      <svg class="w-4 h-4 group-hover/btn:translate-x-1 transition-transform" fill="none" stroke="currentColor" viewBox="0 0 24 24">
        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3"></path>
      </svg>
    </a>
    {%- else %}
    <div class="w-full text-center py-3 px-4 rounded-xl bg-gray-600/50 text-gray-400 cursor-not-allowed font-medium">Coming Soon</div>
    {%- endif %}
  </div>
</div>"##;
