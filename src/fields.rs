use std::ops::{Index, IndexMut};

/// Number of scalar fields carried at every site.
pub const NUM_FIELDS: usize = 3;

/// Scalar fields of the model, in storage order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Main inflaton-like field
    Phi0,
    /// Spectator field
    Phi1,
    /// Torsion field
    Torsion,
}
impl Field {
    pub const ALL: [Field; NUM_FIELDS] = [Field::Phi0, Field::Phi1, Field::Torsion];

    pub fn index(&self) -> usize {
        match self {
            Field::Phi0 => 0,
            Field::Phi1 => 1,
            Field::Torsion => 2,
        }
    }
    /// Field for a storage index. Panics outside `0..NUM_FIELDS`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Field::Phi0,
            1 => Field::Phi1,
            2 => Field::Torsion,
            _ => panic!("Field index should be in 0..{}, found {}", NUM_FIELDS, idx),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Field::Phi0 => "phi0",
            Field::Phi1 => "phi1",
            Field::Torsion => "torsion",
        }
    }
}

macro_rules! field_array {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name(pub [f64; NUM_FIELDS]);

        impl $name {
            pub fn new(values: [f64; NUM_FIELDS]) -> Self {
                Self(values)
            }
            pub fn zeros() -> Self {
                Self([0.0; NUM_FIELDS])
            }
            pub fn values(&self) -> &[f64; NUM_FIELDS] {
                &self.0
            }
        }
        impl Index<Field> for $name {
            type Output = f64;
            fn index(&self, field: Field) -> &f64 {
                &self.0[field.index()]
            }
        }
        impl IndexMut<Field> for $name {
            fn index_mut(&mut self, field: Field) -> &mut f64 {
                &mut self.0[field.index()]
            }
        }
        impl From<[f64; NUM_FIELDS]> for $name {
            fn from(values: [f64; NUM_FIELDS]) -> Self {
                Self(values)
            }
        }
        impl TryFrom<&[f64]> for $name {
            type Error = usize;
            /// Fails with the slice length when it is not `NUM_FIELDS`.
            fn try_from(values: &[f64]) -> Result<Self, usize> {
                <[f64; NUM_FIELDS]>::try_from(values)
                    .map(Self)
                    .map_err(|_| values.len())
            }
        }
    };
}

field_array!(
    /// Field values (φ0, φ1, T) at one site and time slice
    FieldSet
);
field_array!(
    /// Conjugate momenta (π0, π1, πT), indexed like [`FieldSet`]
    MomentumSet
);
