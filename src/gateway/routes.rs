//! Per-resource endpoint tables.
//!
//! The backend grew organically, so resources do not share a uniform URL
//! scheme; each one carries its own table. Templates use `{id}` for the
//! record id, substituted URL-encoded.

use crate::models::{BlogPost, Course, KycSubmission, Meeting, Payment, User, Withdrawal};

/// Endpoint table for one resource.
///
/// `list` is mandatory; every other operation is present only where the
/// backend exposes it.
#[derive(Debug, Clone, Copy)]
pub struct RouteSet {
    /// Collection listing path.
    pub list: &'static str,
    /// Whether the list endpoint accepts a `status` query parameter.
    pub list_status_param: bool,
    /// Single-record fetch template.
    pub item: Option<&'static str>,
    /// Record creation path.
    pub create: Option<&'static str>,
    /// Record update template.
    pub update: Option<&'static str>,
    /// Record deletion template.
    pub remove: Option<&'static str>,
    /// Approve action template.
    pub approve: Option<&'static str>,
    /// Reject action template.
    pub reject: Option<&'static str>,
    /// Status-change action template.
    pub set_status: Option<&'static str>,
}

/// Substitute `{id}` in a route template, URL-encoding the id.
pub fn fill(template: &str, id: &str) -> String {
    template.replace("{id}", &urlencoding::encode(id))
}

/// Resources with a known endpoint table.
pub trait Routed {
    /// The endpoint table for this resource.
    fn routes() -> &'static RouteSet;
}

static USER_ROUTES: RouteSet = RouteSet {
    list: "admin/allUsers",
    list_status_param: false,
    item: None,
    create: None,
    update: None,
    remove: None,
    approve: None,
    reject: None,
    set_status: None,
};

static COURSE_ROUTES: RouteSet = RouteSet {
    list: "admin/courses/get",
    list_status_param: false,
    item: Some("admin/courses/get/details/{id}"),
    create: Some("admin/courses/add"),
    update: Some("admin/courses/update/{id}"),
    remove: Some("admin/courses/delete/{id}"),
    approve: None,
    reject: None,
    set_status: None,
};

static PAYMENT_ROUTES: RouteSet = RouteSet {
    list: "api/payment/requests",
    list_status_param: true,
    item: None,
    create: None,
    update: None,
    remove: None,
    approve: None,
    reject: None,
    set_status: Some("api/payment/requests/{id}"),
};

static KYC_ROUTES: RouteSet = RouteSet {
    list: "api/kyc/admin/kyc-submissions",
    list_status_param: false,
    item: None,
    create: None,
    update: Some("api/kyc/admin/kyc-edit/{id}"),
    remove: Some("api/kyc/admin/kyc-delete/{id}"),
    approve: Some("api/kyc/admin/approve/{id}"),
    reject: Some("api/kyc/admin/reject/{id}"),
    set_status: None,
};

static BLOG_ROUTES: RouteSet = RouteSet {
    list: "api/blogs",
    list_status_param: false,
    item: Some("api/blogs/{id}"),
    create: None,
    update: Some("api/blogs/{id}"),
    remove: Some("api/blogs/{id}"),
    approve: None,
    reject: None,
    set_status: None,
};

static MEETING_ROUTES: RouteSet = RouteSet {
    list: "admin/meetings",
    list_status_param: false,
    item: Some("admin/meetings/{id}"),
    create: Some("admin/meetings"),
    update: Some("admin/meetings/{id}"),
    remove: Some("admin/meetings/{id}"),
    approve: None,
    reject: None,
    set_status: None,
};

static WITHDRAWAL_ROUTES: RouteSet = RouteSet {
    list: "api/wallet/all",
    list_status_param: false,
    item: None,
    create: None,
    update: None,
    remove: None,
    approve: None,
    reject: None,
    set_status: Some("api/wallet/status/{id}"),
};

impl Routed for User {
    fn routes() -> &'static RouteSet {
        &USER_ROUTES
    }
}

impl Routed for Course {
    fn routes() -> &'static RouteSet {
        &COURSE_ROUTES
    }
}

impl Routed for Payment {
    fn routes() -> &'static RouteSet {
        &PAYMENT_ROUTES
    }
}

impl Routed for KycSubmission {
    fn routes() -> &'static RouteSet {
        &KYC_ROUTES
    }
}

impl Routed for BlogPost {
    fn routes() -> &'static RouteSet {
        &BLOG_ROUTES
    }
}

impl Routed for Meeting {
    fn routes() -> &'static RouteSet {
        &MEETING_ROUTES
    }
}

impl Routed for Withdrawal {
    fn routes() -> &'static RouteSet {
        &WITHDRAWAL_ROUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_substitutes_and_encodes() {
        assert_eq!(
            fill("admin/courses/update/{id}", "abc123"),
            "admin/courses/update/abc123"
        );
        assert_eq!(
            fill("api/wallet/status/{id}", "a b"),
            "api/wallet/status/a%20b"
        );
    }

    #[test]
    fn test_every_resource_has_a_list_route() {
        assert!(!User::routes().list.is_empty());
        assert!(!Course::routes().list.is_empty());
        assert!(!Payment::routes().list.is_empty());
        assert!(!KycSubmission::routes().list.is_empty());
        assert!(!BlogPost::routes().list.is_empty());
        assert!(!Meeting::routes().list.is_empty());
        assert!(!Withdrawal::routes().list.is_empty());
    }
}
