use serde::{Deserialize, Serialize};

/// One staff record. The backend stores these encrypted at rest, but the
/// wire shape is plain JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_round_trips() {
        let employee = Employee {
            id: Some(12),
            name: "Asha Rao".to_string(),
            email: "asha@expo.test".to_string(),
            department: "Logistics".to_string(),
            salary: Some(54000.0),
        };
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_salary_is_optional() {
        let employee: Employee = serde_json::from_str(
            r#"{"name":"Dev","email":"dev@expo.test","department":"IT"}"#,
        )
        .unwrap();
        assert!(employee.salary.is_none());
        assert!(employee.id.is_none());
    }
}
