use crate::layout::global_context::use_global_context;
use crate::shared::data::use_data;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::Utc;
use contracts::shared::chat::ChatAuthor;
use contracts::system::roles::Role;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Переписка с наставником (роль User) или со студентом (роль Mentor).
/// Собеседник отвечает автоматически через `chat.reply_delay_ms`.
#[component]
pub fn ChatPanel(role: Role) -> impl IntoView {
    let data = use_data();
    let conversation = match role {
        Role::Mentor => data.mentor_chat,
        _ => data.student_chat,
    };
    let reply_delay_ms = use_global_context()
        .config
        .with_value(|c| c.chat.reply_delay_ms);

    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let send = Callback::new(move |_: ()| {
        let text = draft.get_untracked();
        let sent = conversation
            .try_update(|c| c.send(&text, Utc::now()))
            .unwrap_or(false);
        if !sent {
            return;
        }
        draft.set(String::new());
        scroll_to_bottom();
        log::debug!("chat: message sent, reply in {} ms", reply_delay_ms);

        spawn_local(async move {
            TimeoutFuture::new(reply_delay_ms).await;
            // панель могла быть закрыта, разговор живёт в DataContext
            conversation.try_update(|c| c.push_auto_reply(Utc::now()));
            scroll_to_bottom();
        });
    });

    let peer_name = move || conversation.with(|c| c.peer_name.clone());

    view! {
        <PageFrame page_id="chat--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">{move || format!("Chat with {}", peer_name())}</h1>
            </div>
            <div class="page__content chat">
                <div class="chat__messages" node_ref=messages_ref>
                    <For
                        each=move || conversation.get().messages
                        key=|msg| msg.id
                        let:msg
                    >
                        {
                            let class = match msg.author {
                                ChatAuthor::Me => "chat__message chat__message--me",
                                ChatAuthor::Peer => "chat__message chat__message--peer",
                            };
                            view! {
                                <div class=class>
                                    <div class="chat__text">{msg.text.clone()}</div>
                                    <div class="chat__time">{msg.time_label()}</div>
                                </div>
                            }
                        }
                    </For>
                    <Show when=move || conversation.with(|c| c.is_peer_typing())>
                        <div class="chat__typing">{move || format!("{} is typing…", peer_name())}</div>
                    </Show>
                </div>
                <div class="chat__composer">
                    <Textarea
                        value=draft
                        placeholder="Type a message (Enter to send, Shift+Enter for a new line)"
                        attr:rows=2
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send.run(());
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || draft.with(|d| d.trim().is_empty()))
                        on_click=move |_| send.run(())
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
