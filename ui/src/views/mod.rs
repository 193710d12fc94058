pub mod dashboard;
pub mod feedback;
pub mod onboarding;
pub mod pest_detection;
pub mod pricing;
pub mod soil_health;
pub mod weather;

pub use dashboard::DashboardScreen;
pub use feedback::FeedbackScreen;
pub use onboarding::OnboardingScreen;
pub use pest_detection::PestDetectionScreen;
pub use pricing::PricingScreen;
pub use soil_health::SoilHealthScreen;
pub use weather::WeatherScreen;
