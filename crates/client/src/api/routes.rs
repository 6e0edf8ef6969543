//! Route table for the admin backend.
//!
//! Exact route strings are backend-owned configuration; keeping them in
//! one module means an endpoint move touches exactly one line.

pub const ADMIN_LOGIN: &str = "/admin/login";
pub const ADMINS: &str = "/admin";
pub const ADMIN_CHANGE_PASSWORD: &str = "/admin/change-password";
pub const ADMIN_LOGS: &str = "/admin/logs";
pub const ME_PROFILE: &str = "/admins/me/profile";
pub const ME_PASSWORD: &str = "/admins/me/password";

pub const PRODUCTS: &str = "/products";
pub const CATEGORIES: &str = "/categories";
pub const SUBCATEGORIES: &str = "/subcategories";
pub const UNITS: &str = "/units";
pub const COUNTRIES: &str = "/countries";
pub const CAROUSEL: &str = "/carousel";

pub const SETTINGS_GENERAL: &str = "/settings/general";
pub const CURRENCY: &str = "/currency";
pub const DASHBOARD_SUMMARY: &str = "/dashboard/summary";

pub fn admin(id: &str) -> String {
	format!("/admin/{id}")
}

pub fn product(id: &str) -> String {
	format!("/products/{id}")
}

pub fn products_by_category(category_id: &str) -> String {
	format!("/products/category/{category_id}")
}

pub fn product_files(product_id: &str, is_video: bool) -> String {
	format!("/products/{product_id}/files?isVideo={is_video}")
}

pub fn product_file(product_id: &str, file_id: &str) -> String {
	format!("/products/{product_id}/files/{file_id}")
}

pub fn product_file_order(product_id: &str) -> String {
	format!("/products/{product_id}/files/order")
}

pub fn category(id: &str) -> String {
	format!("/categories/{id}")
}

pub fn subcategory(id: &str) -> String {
	format!("/subcategories/{id}")
}

pub fn unit(id: &str) -> String {
	format!("/units/{id}")
}

pub fn country(id: &str) -> String {
	format!("/countries/{id}")
}

pub fn carousel_item(id: &str) -> String {
	format!("/carousel/{id}")
}
