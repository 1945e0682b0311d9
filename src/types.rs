use serde::{Deserialize, Serialize};

pub type EmployeeId = u32;
pub type PostId = u32;

// Remote records use camelCase field names ("userId", "catchPhrase")

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase", default)]
    pub catch_phrase: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub company: Company,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub employee_id: EmployeeId,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(rename = "postId")]
    pub post_id: PostId,
    /// Author name
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_reads_remote_field_names() {
        let json = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "address": { "city": "McKenziehaven" },
            "company": {
                "name": "Romaguera-Jacobson",
                "catchPhrase": "Face to face bifurcated interface",
                "bs": "e-enable strategic applications"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.username.as_deref(), Some("Samantha"));
        assert_eq!(employee.company.catch_phrase, "Face to face bifurcated interface");
    }

    #[test]
    fn post_and_comment_owner_ids() {
        let post: Post =
            serde_json::from_str(r#"{"userId": 2, "id": 11, "title": "t", "body": "b"}"#).unwrap();
        assert_eq!(post.employee_id, 2);

        let comment: Comment = serde_json::from_str(
            r#"{"postId": 11, "id": 51, "name": "n", "email": "e@x.io", "body": "b"}"#,
        )
        .unwrap();
        assert_eq!(comment.post_id, 11);
    }
}
