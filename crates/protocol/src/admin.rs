//! Admin accounts, settings, dashboard, and the activity log.

use serde::{Deserialize, Serialize};

/// An admin account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
	pub id: String,
	#[serde(default)]
	pub name: String,
	pub username: String,
	pub is_superadmin: bool,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub is_active: Option<bool>,
	#[serde(default)]
	pub created_at: Option<String>,
	#[serde(default)]
	pub last_login: Option<String>,
}

/// Body for creating an admin account (superadmin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
	pub name: String,
	pub username: String,
	pub password: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_superadmin: Option<bool>,
}

/// Partial update for an admin account (superadmin only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_superadmin: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_active: Option<bool>,
}

/// Superadmin-set password change for another admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPasswordChange {
	pub admin_id: String,
	pub new_password: String,
}

/// Self-service profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
}

/// Self-service password update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
	pub current_password: String,
	pub new_password: String,
}

/// Site-wide settings (superadmin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
	pub site_name: String,
	pub contact_email: String,
	pub timezone: String,
	pub email_notifications: bool,
	pub push_notifications: bool,
	pub sms_notifications: bool,
}

/// What an activity-log entry recorded happening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
	Created,
	Updated,
	Deleted,
}

/// Which kind of record an activity-log entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
	Product,
	Category,
	Subcategory,
	Admin,
	User,
	Offer,
}

/// A recent-activity entry shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
	pub id: String,
	pub admin_user_name: String,
	pub action_type: ActionType,
	pub entity_type: EntityType,
	pub entity_name: String,
	pub created_at: String,
	#[serde(default)]
	pub details: Option<serde_json::Value>,
}

/// A raw audit-log row, with before/after snapshots as opaque JSON text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
	pub id: String,
	pub admin_id: String,
	#[serde(default)]
	pub admin: Option<Admin>,
	pub action_type: ActionType,
	pub entity_type: EntityType,
	#[serde(default)]
	pub old_data: Option<String>,
	#[serde(default)]
	pub new_data: Option<String>,
	pub created_at: String,
}

/// Aggregate counters for the dashboard header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
	pub total_products: u64,
	pub total_categories: u64,
	pub total_views: u64,
	pub low_stock_products: u64,
}

/// Dashboard summary: counters plus recent activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
	pub stats: DashboardStats,
	pub activities: Vec<ActivityLog>,
}
