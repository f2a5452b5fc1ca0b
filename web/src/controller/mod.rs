pub(crate) mod health_check_controller;
pub(crate) mod weather_forecast_controller;
