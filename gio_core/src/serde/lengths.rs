use crate::serde::Element;
use crate::GioError;
use anyhow::Result;
use derive_more::Deref;
use std::any;

/// The wire size of an element, queried once per call, before any staging buffer is sized.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stride(usize);
impl Stride {
    pub fn of<E: Element>(elem: &E) -> Result<Self> {
        let size = elem.wire_size();
        if size == 0 {
            return Err(GioError::ContractViolation {
                type_name: any::type_name::<E>(),
                detail: String::from("declared a zero wire size"),
            }
            .into());
        }
        Ok(Self(size))
    }

    /// Appends `elem`'s encoding to `out`, checking it against this stride.
    pub fn encode_into<E: Element>(self, elem: &E, out: &mut Vec<u8>) -> Result<()> {
        let lo = out.len();
        elem.encode(out);
        let actual = out.len() - lo;
        if actual != self.0 {
            return Err(GioError::ContractViolation {
                type_name: any::type_name::<E>(),
                detail: format!("declared {} wire bytes but encoded {actual}", self.0),
            }
            .into());
        }
        Ok(())
    }

    pub fn decode_from<E: Element>(self, elem: &mut E, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), self.0);
        debug_assert_eq!(
            elem.wire_size(),
            self.0,
            "{} changed its wire size within one call",
            any::type_name::<E>()
        );
        elem.decode(bytes);
    }
}
