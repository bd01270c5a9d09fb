//! Common test fixtures

use extended_enum::{extended_enum, BaseExtendedValue, ValueWithDescription};
use uuid::{uuid, Uuid};

#[allow(dead_code)] // Not every test binary needs both identifiers
pub const UUID_A: Uuid = uuid!("79ff3431-3e98-4bec-9a4c-63ede2580f83");
#[allow(dead_code)]
pub const UUID_B: Uuid = uuid!("e7b4b8ae-2224-47ec-afce-40aeb10b85e2");

extended_enum! {
    /// Members of every scalar kind, declared bare and boxed.
    pub enum MixedEnum {
        CONST1 = "const1",
        CONST2 = 1,
        CONST3 = UUID_A,
        NOT_DUPLICATE_CONST3 = "79ff3431-3e98-4bec-9a4c-63ede2580f83",
        CONST4 = BaseExtendedValue::new("const4"),
        CONST5 = BaseExtendedValue::new(2),
        CONST6 = BaseExtendedValue::new(UUID_B),
        CONST7 = ValueWithDescription::new("const7"),
        CONST8 = ValueWithDescription::new(3).with_description("some const8 description"),
    }
}
