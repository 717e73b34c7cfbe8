pub mod messenger;
pub mod weather_feed;
