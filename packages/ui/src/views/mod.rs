mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod home;
pub use home::HomeView;

mod restaurants;
pub use restaurants::RestaurantsView;

mod restaurant;
pub use restaurant::RestaurantView;

mod food;
pub use food::FoodView;

mod profile;
pub use profile::ProfileView;
