//! Runtime effects script generation.
//!
//! All timing decisions are made here, in Rust: the typewriter cycle and the
//! counter frames are precomputed and embedded as JSON, and the emitted
//! script is a plain player with no logic of its own.

use serde::Serialize;

use folio_data::PortfolioData;

use crate::counter::{Counter, COUNTER_INTERVAL_MS};
use crate::reveal::RevealConfig;
use crate::typewriter::{Frame, Typewriter};

/// Delay before the counters start, in milliseconds.
pub const COUNTER_START_DELAY_MS: u64 = 1000;

/// Element id the typewriter writes into.
pub const TYPED_ROLE_ID: &str = "typed-role";

/// Precomputed typewriter cycle for the runtime script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterPlan {
    pub target_id: String,
    pub frames: Vec<Frame>,
}

/// Precomputed count-up for one statistic element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterPlan {
    pub id: String,
    pub frames: Vec<u32>,
    pub suffix: String,
    pub interval_ms: u64,
    pub start_delay_ms: u64,
}

/// Everything the runtime script replays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectsPlan {
    pub typewriter: TypewriterPlan,
    pub counters: Vec<CounterPlan>,
    pub reveal: RevealConfig,
}

impl EffectsPlan {
    /// Build the plan from the data document. Absent roles fall back to the
    /// typewriter's built-in list; absent statistics get no counter.
    pub fn from_data(data: &PortfolioData) -> Self {
        let mut typewriter = Typewriter::new(&data.roles);
        let frames = typewriter.cycle();

        let stats = &data.about.stats;
        let counters = [
            ("yearsCounter", stats.years_learning),
            ("projectsCounter", stats.projects_built),
            ("skillsCounter", stats.technologies),
        ]
        .into_iter()
        .filter_map(|(id, target)| {
            target.map(|t| CounterPlan {
                id: id.to_string(),
                frames: Counter::schedule(t),
                suffix: "+".to_string(),
                interval_ms: COUNTER_INTERVAL_MS,
                start_delay_ms: COUNTER_START_DELAY_MS,
            })
        })
        .collect();

        Self {
            typewriter: TypewriterPlan {
                target_id: TYPED_ROLE_ID.to_string(),
                frames,
            },
            counters,
            reveal: RevealConfig::default(),
        }
    }
}

/// Render the runtime script around the embedded plan.
pub fn effects_script(plan: &EffectsPlan) -> String {
    let plan_json =
        serde_json::to_string(plan).expect("effects plan serialization cannot fail");

    format!(
        r#"// folio effects runtime - generated, do not edit
(function() {{
  'use strict';

  const plan = {plan_json};

  // Typewriter: replay the precomputed cycle in a loop.
  function playTypewriter() {{
    const el = document.getElementById(plan.typewriter.targetId);
    if (!el) return;
    const frames = plan.typewriter.frames;
    if (frames.length === 0) return;

    let i = 0;
    function step() {{
      el.textContent = frames[i].text;
      const delay = frames[i].delayMs;
      i = (i + 1) % frames.length;
      setTimeout(step, delay);
    }}
    step();
  }}

  // Counters: replay each frame list at its interval after the start delay.
  function playCounters() {{
    plan.counters.forEach(function(counter) {{
      const el = document.getElementById(counter.id);
      if (!el) return;

      setTimeout(function() {{
        let i = 0;
        const timer = setInterval(function() {{
          el.textContent = counter.frames[i] + counter.suffix;
          i++;
          if (i >= counter.frames.length) {{
            clearInterval(timer);
          }}
        }}, counter.intervalMs);
      }}, counter.startDelayMs);
    }});
  }}

  // Reveal-on-scroll: one-shot fade/slide-in per observed element.
  function observeReveals() {{
    const reveal = plan.reveal;
    const elements = document.querySelectorAll(reveal.selector);

    const observer = new IntersectionObserver(function(entries) {{
      entries.forEach(function(entry) {{
        if (entry.isIntersecting) {{
          entry.target.style.opacity = '1';
          entry.target.style.transform = 'translateY(0)';
        }}
      }});
    }}, {{ threshold: reveal.threshold, rootMargin: reveal.rootMargin }});

    elements.forEach(function(el) {{
      el.style.opacity = '0';
      el.style.transform = 'translateY(' + reveal.offsetPx + 'px)';
      el.style.transition = 'opacity ' + reveal.transitionSecs + 's ease, transform ' + reveal.transitionSecs + 's ease';
      observer.observe(el);
    }});
  }}

  if (document.readyState === 'loading') {{
    document.addEventListener('DOMContentLoaded', function() {{
      playTypewriter();
      playCounters();
      observeReveals();
    }});
  }} else {{
    playTypewriter();
    playCounters();
    observeReveals();
  }}
}})();
"#
    )
}
