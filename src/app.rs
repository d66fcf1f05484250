use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    CommunityMentorship, Courses, FinalCta, Footer, Header, Hero, JobsHighlight, OutcomeNarrative,
    ProofStrip, ResourceHighlights, Testimonials,
};
use crate::config::LandingConfig;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
}

/// Config handed to [`App`]; defaults when rendered outside it.
#[hook]
pub fn use_landing_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>().unwrap_or_default()
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let root_style = use_memo(config.clone(), |config| config.theme.root_style());

    html! {
        <ContextProvider<Rc<LandingConfig>> context={config}>
          <div class="landing" style={(*root_style).clone()}>
            <Header />
            <main>
              <Hero />
              <ProofStrip />
              <Courses />
              <JobsHighlight />
              <CommunityMentorship />
              <OutcomeNarrative />
              <Testimonials />
              <ResourceHighlights />
              <FinalCta />
            </main>
            <Footer />
          </div>
        </ContextProvider<Rc<LandingConfig>>>
    }
}
