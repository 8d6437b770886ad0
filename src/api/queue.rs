//
//  jenkins-cli
//  api/queue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build queue API
//!
//! A queue item is a build request the server accepted but has not started.
//! It is eventually cancelled or turned into a build; this client returns it
//! as observed at the time of the call and never polls for that transition.

use serde::{Deserialize, Serialize};

use super::client::JenkinsClient;
use super::common::Result;

/// A build request waiting in the queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueueItem {
    /// Queue item number, unique for the lifetime of the server
    pub id: u64,
    pub url: String,
    /// Human readable reason the item is still waiting
    pub why: Option<String>,
    pub blocked: bool,
    pub buildable: bool,
    pub stuck: bool,
    /// Set once the item has been cancelled
    pub cancelled: Option<bool>,
    /// Epoch milliseconds when the item entered the queue
    pub in_queue_since: i64,
    /// Build parameters, newline separated
    pub params: String,
    pub task: Task,
    /// The build this item turned into, once it has started
    pub executable: Option<Executable>,
}

impl QueueItem {
    /// Returns `true` once the item has left the queue as a build.
    pub fn is_started(&self) -> bool {
        self.executable.is_some()
    }
}

/// The job a queue item belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub name: String,
    pub url: String,
    pub color: Option<String>,
}

/// Reference to the build started from a queue item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Executable {
    pub number: u64,
    pub url: String,
}

/// Snapshot of the build queue, in server order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Queue {
    pub items: Vec<QueueItem>,
}

impl JenkinsClient {
    /// Returns the current build queue.
    ///
    /// `GET /queue/api/json`
    pub fn get_queue(&self) -> Result<Queue> {
        self.get_json("/queue", None)
    }

    /// Returns a single queue item by number.
    ///
    /// `GET /queue/item/{number}/api/json`
    pub fn get_queue_item(&self, number: u64) -> Result<QueueItem> {
        self.get_json(&format!("/queue/item/{number}"), None)
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::testing::client;

    const QUEUE: &str = r#"{
        "_class": "hudson.model.Queue",
        "discoverableItems": [],
        "items": [
            {
                "_class": "hudson.model.Queue$WaitingItem",
                "blocked": false,
                "buildable": false,
                "id": 17,
                "inQueueSince": 1760870000000,
                "params": "\nBRANCH=main",
                "stuck": false,
                "task": {"_class": "hudson.model.FreeStyleProject", "name": "core", "url": "http://ci.local:8080/job/core/", "color": "blue"},
                "url": "queue/item/17/",
                "why": "In the quiet period. Expires in 4.9 sec"
            },
            {
                "_class": "hudson.model.Queue$BuildableItem",
                "blocked": false,
                "buildable": true,
                "id": 18,
                "inQueueSince": 1760870001000,
                "params": "",
                "stuck": true,
                "task": {"name": "docs", "url": "http://ci.local:8080/job/docs/"},
                "url": "queue/item/18/",
                "why": "Waiting for next available executor"
            }
        ]
    }"#;

    #[test]
    fn test_get_queue() {
        let (client, fake) = client();
        fake.respond(200, QUEUE);

        let queue = client.get_queue().unwrap();
        assert_eq!(fake.urls(), vec!["http://ci.local:8080/queue/api/json".to_string()]);
        assert_eq!(queue.items.len(), 2);
        assert_eq!(queue.items[0].id, 17);
        assert_eq!(queue.items[0].task.name, "core");
        assert_eq!(queue.items[0].params, "\nBRANCH=main");
        assert!(queue.items[1].stuck);
        assert_eq!(queue.items[1].task.color, None);
    }

    #[test]
    fn test_get_queue_item() {
        let (client, fake) = client();
        fake.respond(
            200,
            r#"{"id": 42, "task": {"name": "core"}, "executable": {"number": 7, "url": "http://ci.local:8080/job/core/7/"}}"#,
        );

        let item = client.get_queue_item(42).unwrap();
        assert_eq!(fake.urls(), vec!["http://ci.local:8080/queue/item/42/api/json".to_string()]);
        assert!(item.is_started());
        assert_eq!(item.executable.unwrap().number, 7);
    }
}
