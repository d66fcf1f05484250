use yew::prelude::*;

use crate::app::use_landing_config;
use crate::content::METRICS;
use crate::hooks::{use_count_up, use_revealed};

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u64,
    pub duration_ms: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting starts when this becomes true.
    pub active: bool,
}

#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let value = use_count_up(props.target, props.duration_ms, props.active);
    html! { <span>{ value }{ props.suffix.clone() }</span> }
}

/// Metric counters that start once the strip scrolls into view.
#[function_component(ProofStrip)]
pub fn proof_strip() -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), config.timings.stats_root_margin);

    html! {
        <section ref={node} class="proof band" aria-label="Proof">
          <div class="container proof-grid">
            { for METRICS.iter().map(|m| html! {
                <div key={m.label} class="metric">
                  <div class="metric-label">{ m.label }</div>
                  <div class="metric-value">
                    <CountUp
                      target={m.value}
                      duration_ms={config.timings.count_up_ms}
                      suffix={m.suffix}
                      active={revealed}
                    />
                  </div>
                </div>
            })}
          </div>
        </section>
    }
}
