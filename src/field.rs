use crate::error::{SkResult, SkillError};
use ndarray::{ArrayBase, ArrayD, ArrayView2, ArrayViewD, Data, Dimension, Ix2, IxDyn};

/// Element types that can be read as an event flag.
///
/// Zero-like values are `false`, everything else is `true`. Floats return
/// `None` for NaN: missing data has to be filtered out by the caller before
/// verification, it is never counted as an event.
pub trait Truthy: Copy {
    fn truthy(self) -> Option<bool>;
}

impl Truthy for bool {
    #[inline(always)]
    fn truthy(self) -> Option<bool> {
        Some(self)
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline(always)]
                fn truthy(self) -> Option<bool> {
                    Some(self != 0)
                }
            }
        )*
    };
}

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline(always)]
                fn truthy(self) -> Option<bool> {
                    if self.is_nan() {
                        None
                    } else {
                        Some(self != 0.0)
                    }
                }
            }
        )*
    };
}

impl_truthy_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_truthy_float!(f32, f64);

/// The canonical boolean field every verification routine works on.
///
/// Any dimensionality is accepted; the neighborhood routines additionally
/// require a 2-D grid (see [`BinaryField::as_grid`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    data: ArrayD<bool>,
}

impl BinaryField {
    pub fn new(data: ArrayD<bool>) -> Self {
        Self { data }
    }

    /// Builds a field from a flat row-major buffer.
    pub fn from_shape_vec<T: Truthy>(shape: &[usize], values: Vec<T>) -> SkResult<Self> {
        let flags = coerce_all(values.into_iter())?;
        let data = ArrayD::from_shape_vec(IxDyn(shape), flags)?;
        Ok(Self { data })
    }

    pub fn from_array<S, D>(values: &ArrayBase<S, D>) -> SkResult<Self>
    where
        S: Data,
        S::Elem: Truthy,
        D: Dimension,
    {
        let flags = coerce_all(values.iter().copied())?;
        let data = ArrayD::from_shape_vec(IxDyn(values.shape()), flags)?;
        Ok(Self { data })
    }

    /// Builds a 2-D field from nested rows. Every row must have the same length.
    pub fn from_rows<T: Truthy>(rows: &[Vec<T>]) -> SkResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SkillError::Validation(format!(
                "Row {} has {} values, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        let values: Vec<T> = rows.iter().flatten().copied().collect();
        Self::from_shape_vec(&[rows.len(), cols], values)
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn view(&self) -> ArrayViewD<'_, bool> {
        self.data.view()
    }

    /// Borrows the field as a (rows, cols) grid.
    pub fn as_grid(&self) -> SkResult<ArrayView2<'_, bool>> {
        self.data.view().into_dimensionality::<Ix2>().map_err(|_| {
            SkillError::Validation(format!(
                "Expected a 2-D grid, got {} dimension(s) {:?}",
                self.ndim(),
                self.shape()
            ))
        })
    }
}

fn coerce_all<T: Truthy>(values: impl Iterator<Item = T>) -> SkResult<Vec<bool>> {
    values
        .enumerate()
        .map(|(index, v)| v.truthy().ok_or(SkillError::MissingValue { index }))
        .collect()
}

/// Adapter from any supported input representation to [`BinaryField`].
///
/// This is the only place where caller data is normalized; the contingency
/// and neighborhood code never sees anything but the canonical field.
pub trait IntoBinaryField {
    fn into_binary_field(self) -> SkResult<BinaryField>;
}

impl IntoBinaryField for BinaryField {
    fn into_binary_field(self) -> SkResult<BinaryField> {
        Ok(self)
    }
}

impl IntoBinaryField for &BinaryField {
    fn into_binary_field(self) -> SkResult<BinaryField> {
        Ok(self.clone())
    }
}

impl<S, D> IntoBinaryField for ArrayBase<S, D>
where
    S: Data,
    S::Elem: Truthy,
    D: Dimension,
{
    fn into_binary_field(self) -> SkResult<BinaryField> {
        BinaryField::from_array(&self)
    }
}

impl<S, D> IntoBinaryField for &ArrayBase<S, D>
where
    S: Data,
    S::Elem: Truthy,
    D: Dimension,
{
    fn into_binary_field(self) -> SkResult<BinaryField> {
        BinaryField::from_array(self)
    }
}

impl<T: Truthy> IntoBinaryField for Vec<Vec<T>> {
    fn into_binary_field(self) -> SkResult<BinaryField> {
        BinaryField::from_rows(&self)
    }
}
