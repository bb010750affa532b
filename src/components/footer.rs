use yew::prelude::*;

use crate::model::{Footer, SocialLinks};

#[derive(Properties, PartialEq, Clone)]
pub struct FooterSectionProps {
    pub footer: Option<Footer>,
    pub social: Option<SocialLinks>,
}

#[function_component]
pub fn FooterSection(props: &FooterSectionProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-content">
                <p id="footer-copyright">
                    if let Some(footer) = &props.footer {
                        { format!("© {}", footer.copyright) }
                    }
                </p>
                <div id="social-links" class="social-links">
                    if let Some(links) = &props.social {
                        <a href={links.github.clone()} class="social-link" target="_blank" rel="noopener noreferrer" title="GitHub">
                            <i class="fab fa-github"></i>
                        </a>
                        <a href={links.linkedin.clone()} class="social-link" target="_blank" rel="noopener noreferrer" title="LinkedIn">
                            <i class="fab fa-linkedin"></i>
                        </a>
                    }
                </div>
            </div>
        </footer>
    }
}
