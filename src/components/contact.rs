use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config::FORM_SUCCESS_MESSAGE;
use crate::model::{Contact, PersonalInfo};
use crate::state::form::collect_fields;
use crate::state::{NoticeAction, NoticeBoard};

#[derive(Properties, PartialEq, Clone)]
pub struct ContactSectionProps {
    pub anchor: NodeRef,
    pub contact: Option<Contact>,
    pub info: Option<PersonalInfo>,
    pub notices: UseReducerDispatcher<NoticeBoard>,
}

/// (icon class, heading, value) rows of the contact card.
pub fn contact_items(info: &PersonalInfo) -> [(&'static str, &'static str, String); 3] {
    [
        ("fas fa-envelope", "Email", info.email.clone()),
        ("fab fa-github", "GitHub", info.github.clone()),
        ("fab fa-linkedin", "LinkedIn", info.linkedin.clone()),
    ]
}

fn read_form(form: &HtmlFormElement) -> BTreeMap<String, String> {
    let Ok(data) = FormData::new_with_form(form) else {
        return BTreeMap::new();
    };
    let entries = js_sys::try_iter(&data).ok().flatten();
    collect_fields(entries.into_iter().flatten().filter_map(|entry| {
        let pair: js_sys::Array = entry.ok()?.dyn_into().ok()?;
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
    }))
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form_ref = use_node_ref();

    // Nothing leaves the page: acknowledge locally and clear the form.
    let onsubmit = {
        let form_ref = form_ref.clone();
        let notices = props.notices.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let fields = read_form(&form);
            log::debug!("contact form submitted locally: {fields:?}");
            notices.dispatch(NoticeAction::ShowFormMessage {
                text: FORM_SUCCESS_MESSAGE.to_string(),
            });
            form.reset();
        })
    };

    let (title, subtitle) = props
        .contact
        .as_ref()
        .map(|c| (c.title.clone(), c.subtitle.clone()))
        .unwrap_or_default();

    html! {
        <section id="contact" class="contact" ref={props.anchor.clone()}>
            <div class="container">
                <h2 id="contact-title" class="section-title fade-in">{ title }</h2>
                <p id="contact-subtitle" class="section-subtitle fade-in">{ subtitle }</p>
                <div class="contact-content">
                    <div id="contact-info" class="contact-info slide-in-left">
                        if let Some(info) = &props.info {
                            { for contact_items(info).into_iter().map(|(icon, heading, value)| html! {
                                <div class="contact-item">
                                    <div class="contact-icon"><i class={icon}></i></div>
                                    <div class="contact-details">
                                        <h3>{ heading }</h3>
                                        <p>{ value }</p>
                                    </div>
                                </div>
                            }) }
                        }
                    </div>
                    <form id="contact-form" class="contact-form slide-in-right" ref={form_ref} {onsubmit}>
                        <div class="form-group">
                            <input type="text" name="name" placeholder="Your Name" required=true />
                        </div>
                        <div class="form-group">
                            <input type="email" name="email" placeholder="Your Email" required=true />
                        </div>
                        <div class="form-group">
                            <input type="text" name="subject" placeholder="Subject" />
                        </div>
                        <div class="form-group">
                            <textarea name="message" rows="5" placeholder="Your Message" required=true></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_rows_come_from_personal_info() {
        let info = PersonalInfo {
            email: "a@b.com".into(),
            github: "github.com/a".into(),
            linkedin: "linkedin.com/in/a".into(),
            ..Default::default()
        };
        let rows = contact_items(&info);
        assert_eq!(rows[0], ("fas fa-envelope", "Email", "a@b.com".to_string()));
        assert_eq!(rows[1].2, "github.com/a");
        assert_eq!(rows[2].1, "LinkedIn");
    }
}
