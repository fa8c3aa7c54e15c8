mod errors;
mod heading;
mod position;
mod subscription;
mod types;

pub use errors::SensorError;
pub use heading::{HeadingSource, OrientationProvider};
pub use position::{PositionEvent, PositionProvider, PositionSource};
pub use subscription::{Subscription, SubscriptionHandle};
pub use types::{GeoFix, GeoPosition, OrientationSample, WatchOptions};
