//! Shared fixtures for unit tests.

use serde_json::{Value, json};

/// A small two-group blueprint.
///
/// Totals: 2 groups, 3 resources, 4 actions, 4 examples, 3 requests,
/// 5 responses.
pub fn sample_blueprint() -> Value {
    json!({
        "_version": "2.0",
        "name": "Notes API",
        "description": "",
        "resourceGroups": [
            {
                "name": "Notes",
                "description": "Group of all note-related resources.",
                "resources": [
                    {
                        "name": "Notes Collection",
                        "uriTemplate": "/notes",
                        "actions": [
                            {
                                "name": "List notes",
                                "method": "GET",
                                "examples": [{
                                    "name": "",
                                    "requests": [{ "name": "", "headers": [], "body": "" }],
                                    "responses": [{ "name": "200", "headers": [], "body": "[]" }]
                                }]
                            },
                            {
                                "name": "Create a note",
                                "method": "POST",
                                "examples": [{
                                    "name": "",
                                    "requests": [{ "name": "json", "body": "{\"title\":\"x\"}" }],
                                    "responses": [{ "name": "201", "body": "" }]
                                }]
                            }
                        ]
                    },
                    {
                        "name": "Note",
                        "uriTemplate": "/notes/{id}",
                        "actions": [{
                            "name": "Retrieve a note",
                            "method": "GET",
                            "examples": [{
                                "name": "",
                                "requests": [],
                                "responses": [{ "name": "200" }, { "name": "404" }]
                            }]
                        }]
                    }
                ]
            },
            {
                "name": "Users",
                "description": "",
                "resources": [{
                    "name": "Users",
                    "uriTemplate": "/users",
                    "actions": [{
                        "name": "List users",
                        "method": "GET",
                        "examples": [{
                            "name": "",
                            "requests": [{ "name": "" }],
                            "responses": [{ "name": "200" }]
                        }]
                    }]
                }]
            }
        ]
    })
}

/// One group, two resources, each with one action holding one example of
/// two requests and one response.
pub fn counter_scenario() -> Value {
    let resource = |uri: &str| {
        json!({
            "name": uri,
            "uriTemplate": uri,
            "actions": [{
                "name": "",
                "method": "GET",
                "examples": [{
                    "name": "",
                    "requests": [{ "name": "first" }, { "name": "second" }],
                    "responses": [{ "name": "200" }]
                }]
            }]
        })
    };

    json!({
        "name": "Counter",
        "resourceGroups": [{
            "name": "Only",
            "resources": [resource("/a"), resource("/b")]
        }]
    })
}
