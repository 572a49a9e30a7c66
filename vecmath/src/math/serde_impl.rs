use super::Vector;
use core::{fmt, marker::PhantomData};
use serde::{
    de::{Error as _, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

// Vectors serialize as a fixed-length tuple, i.e. a plain array in JSON.
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in &self.components {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

struct ComponentsVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for ComponentsVisitor<T, N> {
    type Value = Vector<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} components", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut components = Vec::with_capacity(N);
        while let Some(component) = seq.next_element()? {
            if components.len() == N {
                return Err(A::Error::invalid_length(N + 1, &self));
            }
            components.push(component);
        }
        let len = components.len();
        let components: [T; N] = components
            .try_into()
            .map_err(|_| A::Error::invalid_length(len, &self))?;
        Ok(Vector::new(components))
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, ComponentsVisitor(PhantomData))
    }
}
