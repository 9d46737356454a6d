mod home;
mod not_found;
mod profile;
mod setting;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use setting::SettingPage;
