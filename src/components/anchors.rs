use web_sys::HtmlElement;
use yew::NodeRef;

use crate::state::SectionSpan;

/// Section ids and their nav labels, in page order.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Mount points of the page sections. Scroll tracking only considers refs that resolve.
#[derive(Clone, Default, PartialEq)]
pub struct SectionAnchors {
    pub home: NodeRef,
    pub about: NodeRef,
    pub projects: NodeRef,
    pub contact: NodeRef,
}

impl SectionAnchors {
    fn entries(&self) -> [(&'static str, &NodeRef); 4] {
        [
            ("home", &self.home),
            ("about", &self.about),
            ("projects", &self.projects),
            ("contact", &self.contact),
        ]
    }

    pub fn spans(&self) -> Vec<SectionSpan> {
        self.entries()
            .into_iter()
            .filter_map(|(id, node)| {
                node.cast::<HtmlElement>().map(|el| SectionSpan {
                    id: id.to_string(),
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect()
    }
}
