mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod protected;
pub(crate) use protected::ProtectedRoute;
