// Producers: lazily computed progress reports followed by a final result

use serde_json::Value;

/// One step of a producer: either a progress report or the final result
#[derive(Debug, Clone, PartialEq)]
pub enum Step<Y, R> {
    Yield(Y),
    Complete(R),
}

/// A computation that reports progress values and then completes with a result.
///
/// After returning [`Step::Complete`] a producer is finished and is not
/// resumed again.
pub trait Producer {
    type Value;
    type Output;

    fn resume(&mut self) -> Step<Self::Value, Self::Output>;
}

/// A value a producer may yield. Numeric kinds convert to a progress
/// fraction; anything else returns `None`.
pub trait AsProgress {
    fn as_progress(&self) -> Option<f64>;

    /// Short description used in error messages
    fn describe(&self) -> String;
}

impl AsProgress for f64 {
    fn as_progress(&self) -> Option<f64> {
        (!self.is_nan()).then_some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AsProgress for f32 {
    fn as_progress(&self) -> Option<f64> {
        f64::from(*self).as_progress()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! integer_progress {
    ($($ty:ty),*) => {
        $(
            impl AsProgress for $ty {
                fn as_progress(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_progress!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl AsProgress for Value {
    fn as_progress(&self) -> Option<f64> {
        self.as_f64().and_then(|v| v.as_progress())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Producer backed by a closure
pub struct FnProducer<F> {
    step: F,
}

impl<F, Y, R> Producer for FnProducer<F>
where
    F: FnMut() -> Step<Y, R>,
{
    type Value = Y;
    type Output = R;

    fn resume(&mut self) -> Step<Y, R> {
        (self.step)()
    }
}

/// Build a producer from a closure returning the next [`Step`]
pub fn from_fn<F, Y, R>(step: F) -> FnProducer<F>
where
    F: FnMut() -> Step<Y, R>,
{
    FnProducer { step }
}

/// Producer that yields every item of an iterator, then computes its result
pub struct IterProducer<I, F> {
    iter: I,
    finish: Option<F>,
}

impl<I, F, R> Producer for IterProducer<I, F>
where
    I: Iterator,
    F: FnOnce() -> R,
{
    type Value = I::Item;
    type Output = R;

    fn resume(&mut self) -> Step<I::Item, R> {
        if let Some(value) = self.iter.next() {
            return Step::Yield(value);
        }
        match self.finish.take() {
            Some(finish) => Step::Complete(finish()),
            None => panic!("producer resumed after completion"),
        }
    }
}

/// Yield each item of `iter`, then complete with `finish()`
pub fn from_iter<I, F, R>(iter: I, finish: F) -> IterProducer<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnOnce() -> R,
{
    IterProducer {
        iter: iter.into_iter(),
        finish: Some(finish),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_values_are_progress() {
        assert_eq!(0.5f64.as_progress(), Some(0.5));
        assert_eq!(1u8.as_progress(), Some(1.0));
        assert_eq!(json!(0.25).as_progress(), Some(0.25));
        assert_eq!(json!(0).as_progress(), Some(0.0));
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        assert_eq!(f64::NAN.as_progress(), None);
        assert_eq!(json!("bad").as_progress(), None);
        assert_eq!(json!(null).as_progress(), None);
        assert_eq!(json!([0.5]).as_progress(), None);
    }

    #[test]
    fn test_iter_producer_yields_then_completes() {
        let mut producer = from_iter(vec![0.1, 0.2], || "done");
        assert_eq!(producer.resume(), Step::Yield(0.1));
        assert_eq!(producer.resume(), Step::Yield(0.2));
        assert_eq!(producer.resume(), Step::Complete("done"));
    }

    #[test]
    fn test_fn_producer() {
        let mut count = 0;
        let mut producer = from_fn(move || {
            count += 1;
            if count <= 2 {
                Step::Yield(count as f64 / 2.0)
            } else {
                Step::Complete(count)
            }
        });
        assert_eq!(producer.resume(), Step::Yield(0.5));
        assert_eq!(producer.resume(), Step::Yield(1.0));
        assert_eq!(producer.resume(), Step::Complete(3));
    }
}
