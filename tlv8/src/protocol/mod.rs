/*!
 Named constants from the [HomeKit Accessory Protocol](https://developer.apple.com/homekit/), where TLV8 originates.

 These are plain integers and byte strings. The codec does not interpret any of them
 except [`SEPARATOR`](tlv_types::SEPARATOR), whose value must always be empty.
*/

pub mod pairing;
pub mod tlv_types;
