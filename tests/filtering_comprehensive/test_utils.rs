//! Shared fixtures: a small campaign world as the document store returns it.

use questlog::{Adventure, AdventureParticipant, Document, Post, User};

pub const ADVENTURES: &str = r#"[
    {"$id": "strahd", "$createdAt": "2024-01-10T20:00:00Z", "title": "Curse of Strahd",
     "description": "Gothic horror in Barovia", "status": "active", "isPublic": false},
    {"$id": "tavern", "$createdAt": "2024-02-01T18:00:00Z", "title": "Tavern Tales",
     "description": "Open table, everyone welcome", "status": "active", "isPublic": true},
    {"$id": "tomb", "$createdAt": "2023-11-05T18:00:00Z", "title": "Tomb of Annihilation",
     "description": "Jungle and undead", "status": "inactive", "isPublic": false},
    {"$id": "dragon", "$createdAt": "2024-03-01T18:00:00Z", "title": "Dragão de Gelo",
     "status": "active", "isPublic": false}
]"#;

pub const POSTS: &str = r#"[
    {"$id": "p1", "$createdAt": "2024-03-02T10:00:00Z", "creator": "ana", "title": "Castle Ravenloft",
     "tags": ["castelo", "vampiro"], "adventures": ["strahd"]},
    {"$id": "p2", "$createdAt": "2024-03-03T10:00:00Z", "creator": "bia", "title": "Mead and music",
     "location": "Yawning Portal", "tags": ["taverna"], "adventures": ["tavern"]},
    {"$id": "p3", "$createdAt": "2024-03-01T10:00:00Z", "creator": "ana", "title": "Dragão branco avistado",
     "tags": ["Dragões", "gelo"], "adventures": ["dragon"]},
    {"$id": "p4", "$createdAt": "2024-02-20T10:00:00Z", "creator": "caio", "title": "Character art",
     "tags": ["arte"], "adventures": null},
    {"$id": "p5", "$createdAt": "2024-01-15T10:00:00Z", "creator": "ana", "title": "Undead horde",
     "tags": ["mortos-vivos"], "adventures": ["tomb", "strahd"]},
    {"$id": "p6", "$createdAt": "2024-03-04T10:00:00Z", "creator": "bia", "title": "Lost map",
     "tags": [], "adventures": ["unknown-adventure"]}
]"#;

pub const PARTICIPANTS: &str = r#"[
    {"$id": "m1", "$createdAt": "2024-01-10T20:00:00Z", "adventureId": "strahd", "userId": "ana", "addedBy": "gm"},
    {"$id": "m2", "$createdAt": "2024-03-01T18:00:00Z", "adventureId": "dragon", "userId": "ana", "addedBy": "gm"},
    {"$id": "m3", "$createdAt": "2024-03-01T18:00:00Z", "adventureId": "dragon", "userId": "bia", "addedBy": "gm"}
]"#;

pub fn adventures() -> Vec<Adventure> {
    serde_json::from_str(ADVENTURES).unwrap()
}

pub fn posts() -> Vec<Post> {
    serde_json::from_str(POSTS).unwrap()
}

pub fn participants() -> Vec<AdventureParticipant> {
    serde_json::from_str(PARTICIPANTS).unwrap()
}

pub fn player(id: &str) -> User {
    serde_json::from_value(serde_json::json!({ "id": id, "role": "user" })).unwrap()
}

pub fn game_master() -> User {
    serde_json::from_value(serde_json::json!({ "id": "gm", "role": "admin" })).unwrap()
}

pub fn ids<T: Document>(items: &[T]) -> Vec<&str> {
    items.iter().map(|i| i.id()).collect()
}
