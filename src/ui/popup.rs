/// Popup UI for the PR Peek extension

use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controller::{
    FetchOutcome, MSG_EMPTY_TOKEN, MSG_EMPTY_USERNAME, MSG_FETCHING, MSG_MISSING_TOKEN,
    MSG_TOKEN_SAVED, PopupController, SaveTokenOutcome, TOKEN_SAVED_PLACEHOLDER, failure_status,
    results_status,
};
use crate::github::GitHubClient;
use crate::pr_data::PullRequestSummary;
use crate::storage::ChromeStorage;
use crate::ui::components::{PrItem, StatusLine, StatusTone};

const SUCCESS_MESSAGE_MILLIS: u64 = 3000;

#[derive(Clone, PartialEq)]
struct Status {
    tone: StatusTone,
    text: String,
}

impl Status {
    fn new(tone: StatusTone, text: impl Into<String>) -> Status {
        Status {
            tone,
            text: text.into(),
        }
    }
}

fn controller() -> PopupController<ChromeStorage, GitHubClient> {
    PopupController::new(ChromeStorage, GitHubClient)
}

#[function_component(App)]
pub fn app() -> Html {
    let username = use_state(String::new);
    let token_input = use_state(String::new);
    let token_saved = use_state(|| false);
    let status = use_state(|| None::<Status>);
    let results = use_state(Vec::<PullRequestSummary>::new);

    // Load saved username and token presence on startup
    {
        let username = username.clone();
        let token_saved = token_saved.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let init = controller().initialize().await;
                if let Some(name) = init.username {
                    username.set(name);
                }
                token_saved.set(init.token_saved);
            });
            || ()
        });
    }

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_token_input = {
        let token_input = token_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                token_input.set(input.value());
            }
        })
    };

    // Save the token; the field is write-only and cleared on success
    let on_save_token = {
        let token_input = token_input.clone();
        let token_saved = token_saved.clone();
        let status = status.clone();

        Callback::from(move |_| {
            let raw = (*token_input).clone();
            let token_input = token_input.clone();
            let token_saved = token_saved.clone();
            let status = status.clone();

            spawn_local(async move {
                match controller().save_token(&raw).await {
                    Ok(SaveTokenOutcome::Saved) => {
                        token_input.set(String::new());
                        token_saved.set(true);
                        status.set(Some(Status::new(StatusTone::Success, MSG_TOKEN_SAVED)));

                        sleep(Duration::from_millis(SUCCESS_MESSAGE_MILLIS)).await;
                        status.set(None);
                    }
                    Ok(SaveTokenOutcome::EmptyToken) => {
                        status.set(Some(Status::new(StatusTone::Error, MSG_EMPTY_TOKEN)));
                    }
                    Err(err) => {
                        log::error!("token save failed: {err}");
                        status.set(Some(Status::new(
                            StatusTone::Error,
                            failure_status(&err.to_string()),
                        )));
                    }
                }
            });
        })
    };

    // Fetch the pull requests
    let on_fetch = {
        let username = username.clone();
        let status = status.clone();
        let results = results.clone();

        Callback::from(move |_| {
            let name = (*username).clone();
            let status = status.clone();
            let results = results.clone();

            if name.is_empty() {
                status.set(Some(Status::new(StatusTone::Error, MSG_EMPTY_USERNAME)));
                return;
            }

            status.set(Some(Status::new(StatusTone::Info, MSG_FETCHING)));
            results.set(Vec::new());

            spawn_local(async move {
                match controller().fetch_pull_requests(&name).await {
                    FetchOutcome::EmptyUsername => {
                        status.set(Some(Status::new(StatusTone::Error, MSG_EMPTY_USERNAME)));
                    }
                    FetchOutcome::MissingToken => {
                        status.set(Some(Status::new(StatusTone::Error, MSG_MISSING_TOKEN)));
                    }
                    FetchOutcome::Fetched(items) => {
                        let tone = if items.is_empty() {
                            StatusTone::Muted
                        } else {
                            StatusTone::Success
                        };
                        status.set(Some(Status::new(tone, results_status(&items))));
                        results.set(items);
                    }
                    FetchOutcome::Failed(message) => {
                        status.set(Some(Status::new(StatusTone::Error, failure_status(&message))));
                    }
                }
            });
        })
    };

    let token_placeholder = if *token_saved {
        TOKEN_SAVED_PLACEHOLDER
    } else {
        "Personal Access Token"
    };

    html! {
        <div style="width: 360px; padding: 16px; font-family: -apple-system, sans-serif;">
            <h1 style="font-size: 16px; margin: 0 0 12px 0;">{"PR Peek"}</h1>

            <input
                type="text"
                placeholder="GitHub username"
                value={(*username).clone()}
                oninput={on_username_input}
                style="width: 100%; box-sizing: border-box; margin-bottom: 8px; padding: 6px;"
            />
            <input
                type="password"
                placeholder={token_placeholder}
                value={(*token_input).clone()}
                oninput={on_token_input}
                style="width: 100%; box-sizing: border-box; margin-bottom: 8px; padding: 6px;"
            />

            <div style="display: flex; gap: 8px;">
                <button
                    onclick={on_save_token}
                    style="flex: 1; padding: 6px; cursor: pointer;"
                >
                    {"Save Token"}
                </button>
                <button
                    onclick={on_fetch}
                    style="flex: 1; padding: 6px; cursor: pointer;"
                >
                    {"Fetch Pull Requests"}
                </button>
            </div>

            if let Some(s) = (*status).clone() {
                <StatusLine tone={s.tone} text={s.text} />
            }

            <div class="results">
                {for results.iter().map(|pr| html! {
                    <PrItem pr={pr.clone()} />
                })}
            </div>
        </div>
    }
}
