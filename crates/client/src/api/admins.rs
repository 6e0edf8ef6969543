//! Admin management, self-service, settings, and dashboard endpoints.
//!
//! Everything except the self-service pair requires superadmin privilege;
//! the backend enforces that on each call, the client just surfaces the
//! resulting 401/403.

use shelf_protocol::{
	Admin, AdminPasswordChange, ApiMessage, CreateAdminRequest, DashboardSummary, GeneralSettings,
	LogEntry, PasswordUpdate, ProfileUpdate, UpdateAdminRequest,
};

use super::{ApiClient, routes};
use crate::error::Result;

impl ApiClient {
	pub async fn get_admins(&self) -> Result<Vec<Admin>> {
		self.get_json(routes::ADMINS).await
	}

	pub async fn get_admin(&self, id: &str) -> Result<Admin> {
		self.get_json(&routes::admin(id)).await
	}

	pub async fn create_admin(&self, request: &CreateAdminRequest) -> Result<Admin> {
		self.post_json(routes::ADMINS, request).await
	}

	pub async fn update_admin(&self, id: &str, request: &UpdateAdminRequest) -> Result<Admin> {
		self.patch_json(&routes::admin(id), request).await
	}

	pub async fn delete_admin(&self, id: &str) -> Result<()> {
		self.delete(&routes::admin(id)).await
	}

	/// Sets another admin's password.
	pub async fn change_admin_password(&self, admin_id: &str, new_password: &str) -> Result<Admin> {
		let body = AdminPasswordChange {
			admin_id: admin_id.to_string(),
			new_password: new_password.to_string(),
		};
		self.patch_json(routes::ADMIN_CHANGE_PASSWORD, &body).await
	}

	/// Raw audit-log rows, newest first.
	pub async fn get_logs(&self) -> Result<Vec<LogEntry>> {
		self.get_json(routes::ADMIN_LOGS).await
	}

	/// Updates the calling admin's own profile.
	pub async fn update_my_profile(&self, update: &ProfileUpdate) -> Result<Admin> {
		self.patch_json(routes::ME_PROFILE, update).await
	}

	/// Updates the calling admin's own password.
	pub async fn update_my_password(&self, update: &PasswordUpdate) -> Result<ApiMessage> {
		self.patch_json(routes::ME_PASSWORD, update).await
	}

	pub async fn get_general_settings(&self) -> Result<GeneralSettings> {
		self.get_json(routes::SETTINGS_GENERAL).await
	}

	pub async fn update_general_settings(&self, settings: &GeneralSettings) -> Result<GeneralSettings> {
		self.patch_json(routes::SETTINGS_GENERAL, settings).await
	}

	/// Dashboard counters plus recent activity.
	pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
		self.get_json(routes::DASHBOARD_SUMMARY).await
	}
}
