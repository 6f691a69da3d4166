/* 

This is intended to quickly import commonly used items across
the bounds crate.

@date: 18 Oct, 2026
@author: bartu
*/

// Most modules log something, so tracing lives here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::{Deserialize};

pub use crate::numeric::{*};
