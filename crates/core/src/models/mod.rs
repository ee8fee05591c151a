//! Entity records and their create/update input DTOs.
//!
//! Records mirror what the hosted data service returns: they are immutable
//! once fetched and replaced wholesale when a mutation succeeds. Input DTOs
//! carry `validator` rules checked at the handler boundary.

pub mod invitation;
pub mod reseller;
pub mod user;

pub use invitation::{CreateInvitation, Invitation, InvitationStatus, UpdateInvitation};
pub use reseller::{CreateReseller, Reseller, UpdateReseller};
pub use user::{CreateUser, UpdateUser, User};
