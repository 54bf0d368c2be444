/*!
 This module defines utilities for working with decoded TLV8 data.
*/

pub mod format;
