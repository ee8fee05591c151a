pub mod admin_resellers;
pub mod admin_users;
pub mod invitations;
pub mod revalidation;
