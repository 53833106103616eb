use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(EmployeeId);

/// A record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: EmployeeId,
    pub emp_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
}

impl Employee {
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            emp_name: self.emp_name.clone(),
            position: self.position.clone(),
            department: self.department.clone(),
            email: self.email.clone(),
        }
    }
}

/// The editable part of an employee; also the POST/PUT request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub emp_name: String,
    pub position: String,
    pub department: String,
    pub email: String,
}

impl EmployeeFields {
    pub fn is_blank(&self) -> bool {
        self.emp_name.is_empty()
            && self.position.is_empty()
            && self.department.is_empty()
            && self.email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_id_serializes_as_bare_integer() {
        let employee: Employee = serde_json::from_str(
            r#"{"emp_id":1,"emp_name":"Alice","position":"Eng","department":"R&D","email":"a@x.com"}"#,
        )
        .expect("decode employee");

        assert_eq!(employee.emp_id, EmployeeId(1));
        assert_eq!(employee.emp_id.to_string(), "1");
    }

    #[test]
    fn field_payload_never_carries_the_id() {
        let employee = Employee {
            emp_id: EmployeeId(42),
            emp_name: "Bob".to_string(),
            position: "Ops".to_string(),
            department: "Infra".to_string(),
            email: "bob@x.com".to_string(),
        };

        let body = serde_json::to_value(employee.fields()).expect("encode fields");
        let object = body.as_object().expect("json object");

        assert!(!object.contains_key("emp_id"));
        assert_eq!(object.len(), 4);
        assert_eq!(object["emp_name"], "Bob");
    }

    #[test]
    fn default_fields_are_blank() {
        assert!(EmployeeFields::default().is_blank());
        let fields = EmployeeFields {
            email: "x@y.z".to_string(),
            ..EmployeeFields::default()
        };
        assert!(!fields.is_blank());
    }
}
