//! The command router: drives the store-query and enrichment paths for one
//! inbound message and produces the reply.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use reqwest::Client;
use tracing::{error, info};

use linkdrop_core::{
    Category, IncomingMessage, ItemKind, ItemStatus, ItemStore, MediaMirror, MirroredMedia,
    SavedItem,
};
use linkdrop_enrich::EnrichmentClient;

use crate::command::{classify_command, Command};
use crate::ingest::{ingest_link, Saver};
use crate::reply::{format_preview, FailedAction, Reply};

/// Platform label stamped on mirrored screenshots.
const SCREENSHOT_SOURCE: &str = "WhatsApp";

pub struct CommandRouter {
    store: Arc<dyn ItemStore>,
    media: Arc<dyn MediaMirror>,
    enrichment: Option<EnrichmentClient>,
    http: Client,
    sender_names: HashMap<String, String>,
}

impl CommandRouter {
    pub fn new(
        store: Arc<dyn ItemStore>,
        media: Arc<dyn MediaMirror>,
        enrichment: Option<EnrichmentClient>,
        http: Client,
        sender_names: HashMap<String, String>,
    ) -> Self {
        Self {
            store,
            media,
            enrichment,
            http,
            sender_names,
        }
    }

    /// Handle one inbound message end to end.
    pub async fn handle(&self, message: &IncomingMessage) -> Reply {
        let command = classify_command(&message.body, !message.attachments.is_empty());
        info!(sender = %message.sender, ?command, "routing message");

        match command {
            Command::SaveMedia => self.save_media(message).await,
            Command::Show => self.show(false).await,
            Command::ShowAndClear => self.show(true).await,
            Command::Clear => self.clear().await,
            Command::SaveLink(url) => {
                let url = url.to_string();
                self.save_link(message, &url).await
            }
            Command::Prompt => Reply::Prompt,
        }
    }

    async fn show(&self, clear_after: bool) -> Reply {
        let items = match self.store.list().await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "inbox fetch failed");
                return Reply::Error { action: FailedAction::Fetch };
            }
        };

        if items.is_empty() {
            return Reply::EmptyInbox;
        }

        let preview = format_preview(&items);
        if clear_after {
            if let Err(e) = self.store.delete_all().await {
                error!(error = %e, "clear after viewing failed");
                return Reply::Error { action: FailedAction::Clear };
            }
            Reply::InboxCleared { preview }
        } else {
            Reply::Inbox { preview }
        }
    }

    async fn clear(&self) -> Reply {
        match self.store.delete_all().await {
            Ok(()) => Reply::Cleared,
            Err(e) => {
                error!(error = %e, "clear failed");
                Reply::Error { action: FailedAction::Clear }
            }
        }
    }

    async fn save_link(&self, message: &IncomingMessage, url: &str) -> Reply {
        let saver = self.saver(&message.sender);
        let item = ingest_link(&self.http, self.enrichment.as_ref(), url, &saver, Utc::now()).await;

        match self.store.create(item).await {
            Ok(stored) => Reply::Saved { title: stored.item.title },
            Err(e) => {
                error!(url, error = %e, "item create failed");
                Reply::Error { action: FailedAction::Save }
            }
        }
    }

    async fn save_media(&self, message: &IncomingMessage) -> Reply {
        let results = match self.media.mirror_all(&message.attachments).await {
            Ok(results) => results,
            Err(e) => {
                error!(error = %e, "media mirroring unavailable");
                return Reply::Error { action: FailedAction::Media };
            }
        };

        let saver = self.saver(&message.sender);
        let mut saved = 0;
        let mut failed = 0;
        for result in results {
            match result {
                Ok(mirrored) => match self.store.create(screenshot_item(&mirrored, &saver)).await {
                    Ok(_) => saved += 1,
                    Err(e) => {
                        error!(error = %e, "screenshot create failed");
                        failed += 1;
                    }
                },
                Err(_) => failed += 1,
            }
        }

        if saved == 0 {
            Reply::Error { action: FailedAction::Media }
        } else {
            Reply::MediaSaved { saved, failed }
        }
    }

    fn saver(&self, sender: &str) -> Saver {
        let number = sender.strip_prefix("whatsapp:").unwrap_or(sender);
        let display_name = self
            .sender_names
            .get(sender)
            .or_else(|| self.sender_names.get(number))
            .cloned()
            .unwrap_or_else(|| number.to_string());
        Saver {
            display_name,
            number: sender.to_string(),
        }
    }
}

fn screenshot_item(mirrored: &MirroredMedia, saver: &Saver) -> SavedItem {
    SavedItem {
        title: "Screenshot".to_string(),
        page_title: None,
        url: mirrored.public_url.clone(),
        kind: ItemKind::Image,
        tags: vec!["screenshot".to_string()],
        category: Category::Screenshots,
        status: ItemStatus::Inbox,
        summary: None,
        source: SCREENSHOT_SOURCE.to_string(),
        saved_by: saver.display_name.clone(),
        saved_by_number: saver.number.clone(),
        timestamp: Utc::now(),
        viewed_at: None,
    }
}
