mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod publications;
pub use publications::Publications;
