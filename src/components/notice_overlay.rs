use yew::prelude::*;

use crate::config::PRIMARY_DATA_URL;
use crate::state::{NoticeBoard, Phase};

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeOverlayProps {
    pub board: NoticeBoard,
    pub on_dismiss_data_notice: Callback<()>,
}

#[function_component(NoticeOverlay)]
pub fn notice_overlay(props: &NoticeOverlayProps) -> Html {
    let data_notice = props.board.data_notice.map(|toast| {
        let opacity = if toast.phase() == Phase::Visible { 1 } else { 0 };
        let close = {
            let cb = props.on_dismiss_data_notice.clone();
            Callback::from(move |_| cb.emit(()))
        };
        html! {
            <div class="data-notification" style={format!("position:fixed; top:20px; left:50%; transform:translateX(-50%); background:#2196F3; color:white; padding:15px 20px; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.2); z-index:10000; opacity:{opacity}; transition:all 0.3s ease; max-width:500px; font-family:inherit;")}>
                <div class="notification-content" style="display:flex; align-items:center; gap:12px;">
                    <i class="fas fa-info-circle"></i>
                    <div class="notification-text">
                        <strong>{"Using Template Data"}</strong>
                        <p>
                            {"Create a "}
                            <code style="background:rgba(255,255,255,0.2); padding:2px 6px; border-radius:3px; font-family:monospace;">{ PRIMARY_DATA_URL }</code>
                            {" file to customize your portfolio content."}
                        </p>
                    </div>
                    <button class="notification-close" onclick={close} style="background:rgba(255,255,255,0.2); border:none; color:white; padding:5px 8px; border-radius:4px; cursor:pointer; margin-left:auto;">
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            </div>
        }
    });

    let form_message = props.board.form_message.as_ref().map(|msg| {
        let (opacity, offset) = if msg.toast.phase() == Phase::Visible { (1, "0") } else { (0, "100%") };
        html! {
            <div class="form-message success" style={format!("position:fixed; top:20px; right:20px; background:#4CAF50; color:white; padding:15px 25px; border-radius:8px; box-shadow:0 4px 12px rgba(0,0,0,0.2); z-index:10000; opacity:{opacity}; transform:translateX({offset}); transition:all 0.3s ease;")}>
                { msg.text.clone() }
            </div>
        }
    });

    html! {
        <>
            { for data_notice }
            { for form_message }
        </>
    }
}
