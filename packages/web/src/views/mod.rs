mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod exhibitions;
pub use exhibitions::Exhibitions;

mod products;
pub use products::Products;

mod users;
pub use users::Users;

mod employees;
pub use employees::Employees;

mod visitors;
pub use visitors::Visitors;

mod visit;
pub use visit::Visit;
