use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "completa")]
    pub completed: bool,
}

/// Body of `POST /tarefas` and `PUT /tarefas/{id}`.
///
/// An update replaces every field, so omitted optionals reset to their
/// defaults instead of keeping the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPayload {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "completa", default)]
    pub completed: bool,
}

impl Task {
    pub fn new(payload: TaskPayload) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), payload)
    }

    pub fn with_id(id: String, payload: TaskPayload) -> Self {
        Self {
            id,
            title: payload.title,
            description: payload.description,
            completed: payload.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "imagem_url")]
    pub image_url: Option<String>,
}

/// Vehicle fields as submitted by the create form or the edit page's JSON PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiclePayload {
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "imagem_url", default)]
    pub image_url: Option<String>,
}

impl VehiclePayload {
    /// An empty image field from an HTML form means "no image".
    pub fn normalized(mut self) -> Self {
        if self
            .image_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            self.image_url = None;
        }
        self
    }
}

impl Vehicle {
    pub fn with_id(id: i64, payload: VehiclePayload) -> Self {
        Self {
            id,
            brand: payload.brand,
            model: payload.model,
            year: payload.year,
            image_url: payload.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_payload_defaults_optional_fields() {
        let payload: TaskPayload = serde_json::from_value(json!({"titulo": "Buy milk"})).unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.description, None);
        assert!(!payload.completed);
    }

    #[test]
    fn task_payload_requires_title() {
        let err = serde_json::from_value::<TaskPayload>(json!({"descricao": "x"})).unwrap_err();
        assert!(err.to_string().contains("titulo"));
    }

    #[test]
    fn task_payload_ignores_client_id() {
        let payload: TaskPayload =
            serde_json::from_value(json!({"id": "mine", "titulo": "t", "completa": true})).unwrap();
        let task = Task::new(payload);
        assert_ne!(task.id, "mine");
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert!(task.completed);
    }

    #[test]
    fn new_tasks_get_distinct_ids() {
        let payload = TaskPayload {
            title: "same".into(),
            description: None,
            completed: false,
        };
        assert_ne!(Task::new(payload.clone()).id, Task::new(payload).id);
    }

    #[test]
    fn task_serializes_with_wire_names() {
        let task = Task {
            id: "abc".into(),
            title: "t".into(),
            description: None,
            completed: false,
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"id": "abc", "titulo": "t", "descricao": null, "completa": false})
        );
    }

    #[test]
    fn vehicle_payload_rejects_non_integer_year() {
        let result = serde_json::from_value::<VehiclePayload>(
            json!({"marca": "Toyota", "modelo": "Corolla", "ano": "soon"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn blank_image_url_is_normalized_away() {
        let payload = VehiclePayload {
            brand: "Fiat".into(),
            model: "Uno".into(),
            year: 1995,
            image_url: Some("  ".into()),
        };
        assert_eq!(payload.normalized().image_url, None);
    }
}
