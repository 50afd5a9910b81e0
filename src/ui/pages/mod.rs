pub mod calculator;
pub mod employee;
pub mod home;
pub mod profile_select;
pub mod rates;
pub mod welcome;

pub use calculator::CalculatorPage;
pub use employee::EmployeePage;
pub use home::HomePage;
pub use profile_select::{ProfileIndustryPage, ProfileTypePage};
pub use rates::RatesPage;
pub use welcome::WelcomePage;
