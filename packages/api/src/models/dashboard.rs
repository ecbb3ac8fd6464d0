use serde::Deserialize;

/// Aggregate view served by the dashboard endpoint. All numbers are computed
/// server-side; the client only renders them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub total_visitors: u64,
    // Older backend builds spelled this "todaysVisitors".
    #[serde(default, alias = "todaysVisitors")]
    pub today_visitors: u64,
    #[serde(default)]
    pub total_product_interests: u64,
    #[serde(default)]
    pub recent_visitors: Vec<RecentVisitor>,
    #[serde(default)]
    pub analytics: DashboardAnalytics,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    #[serde(default)]
    pub visitors_per_day: Vec<DateCount>,
    #[serde(default)]
    pub top_products: Vec<NameCount>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentVisitor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DateCount {
    pub date: String,
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_dashboard_parses() {
        let json = r#"{
            "totalVisitors": 120,
            "todayVisitors": 8,
            "totalProductInterests": 45,
            "recentVisitors": [
                {"id": 1, "name": "A", "email": "a@b.c", "phone": "1", "createdAt": "2025-03-01"}
            ],
            "analytics": {
                "visitorsPerDay": [{"date": "2025-03-01", "count": 8}],
                "topProducts": [{"name": "Sensor", "count": 12}]
            }
        }"#;
        let dashboard: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.total_visitors, 120);
        assert_eq!(dashboard.today_visitors, 8);
        assert_eq!(dashboard.analytics.top_products[0].name, "Sensor");
    }

    #[test]
    fn test_older_todays_visitors_spelling_is_accepted() {
        let dashboard: Dashboard =
            serde_json::from_str(r#"{"totalVisitors": 1, "todaysVisitors": 1}"#).unwrap();
        assert_eq!(dashboard.today_visitors, 1);
    }

    #[test]
    fn test_sparse_payload_defaults_to_zeroes() {
        let dashboard: Dashboard = serde_json::from_str("{}").unwrap();
        assert_eq!(dashboard.total_visitors, 0);
        assert!(dashboard.recent_visitors.is_empty());
        assert!(dashboard.analytics.visitors_per_day.is_empty());
    }
}
