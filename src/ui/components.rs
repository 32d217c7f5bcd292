/// Reusable UI components

use yew::prelude::*;

use crate::pr_data::PullRequestSummary;

/// Tone of the status line; colors follow the GitHub palette
#[derive(PartialEq, Clone, Copy)]
pub enum StatusTone {
    Info,
    Success,
    Error,
    Muted,
}

impl StatusTone {
    fn color(self) -> &'static str {
        match self {
            StatusTone::Info => "#0366d6",
            StatusTone::Success => "#2ea44f",
            StatusTone::Error => "#d73a49",
            StatusTone::Muted => "#586069",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub tone: StatusTone,
    pub text: String,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    html! {
        <div
            class="status"
            style={format!("margin: 8px 0; font-size: 13px; color: {};", props.tone.color())}
        >
            {&props.text}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrItemProps {
    pub pr: PullRequestSummary,
}

/// One entry in the results list: a link to the PR and its repository label
#[function_component(PrItem)]
pub fn pr_item(props: &PrItemProps) -> Html {
    html! {
        <div class="pr-item" style="padding: 8px 0; border-bottom: 1px solid #e1e4e8;">
            <a
                class="pr-title"
                href={props.pr.html_url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                style="color: #0366d6; text-decoration: none; font-weight: 500;"
            >
                {props.pr.link_label()}
            </a>
            <div class="pr-repo" style="font-size: 12px; color: #586069;">
                {props.pr.repo_label()}
            </div>
        </div>
    }
}
