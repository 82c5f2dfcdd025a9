use std::borrow::Cow;
use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::error::Error;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, TryLockError};
use std::time::Duration;

use crate::fields::chain::{ChainFormatter, Wrapped};
use crate::fields::loggable::{Loggable, Replacement, Shape};
use crate::fields::record::Record;
use crate::fields::value::Value;

/// Placeholder shape of lock-like containers; their override normally wins.
const GUARDED: &str = "<guarded>";

macro_rules! impl_signed {
	($($ty:ty),*) => {
		$(impl Loggable for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Int(i64::from(*self))
			}
		})*
	};
}

macro_rules! impl_unsigned {
	($($ty:ty),*) => {
		$(impl Loggable for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Uint(u64::from(*self))
			}
		})*
	};
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl Loggable for isize {
	fn shape(&self) -> Shape<'_> {
		i64::try_from(*self).map_or(Shape::Opaque(self), Shape::Int)
	}
}

impl Loggable for usize {
	fn shape(&self) -> Shape<'_> {
		u64::try_from(*self).map_or(Shape::Opaque(self), Shape::Uint)
	}
}

impl Loggable for i128 {
	fn shape(&self) -> Shape<'_> {
		i64::try_from(*self).map_or(Shape::Opaque(self), Shape::Int)
	}
}

impl Loggable for u128 {
	fn shape(&self) -> Shape<'_> {
		u64::try_from(*self).map_or(Shape::Opaque(self), Shape::Uint)
	}
}

impl Loggable for bool {
	fn shape(&self) -> Shape<'_> {
		Shape::Bool(*self)
	}
}

impl Loggable for f32 {
	fn shape(&self) -> Shape<'_> {
		Shape::Float(f64::from(*self))
	}
}

impl Loggable for f64 {
	fn shape(&self) -> Shape<'_> {
		Shape::Float(*self)
	}
}

impl Loggable for char {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Owned(self.to_string()))
	}
}

impl Loggable for str {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(self))
	}
}

impl Loggable for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(self))
	}
}

impl Loggable for Cow<'_, str> {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(self))
	}
}

impl Loggable for () {
	fn shape(&self) -> Shape<'_> {
		Shape::Record(Record::new("()"))
	}
}

impl Loggable for Value {
	fn shape(&self) -> Shape<'_> {
		Shape::Value(self)
	}
}

impl<T: Loggable> Loggable for Option<T> {
	fn shape(&self) -> Shape<'_> {
		match self {
			Some(value) => Shape::Ref(value),
			None => Shape::Null,
		}
	}
}

/// Transparent smart pointers expose everything their pointee does.
macro_rules! forward_loggable {
	($($impl_head:tt)*) => {
		$($impl_head)* {
			fn shape(&self) -> Shape<'_> {
				(**self).shape()
			}

			fn represent(&self) -> Option<Replacement<'_>> {
				(**self).represent()
			}

			fn as_chain(&self) -> Option<&dyn ChainFormatter> {
				(**self).as_chain()
			}

			fn as_error(&self) -> Option<&dyn Error> {
				(**self).as_error()
			}

			fn as_display(&self) -> Option<&dyn Display> {
				(**self).as_display()
			}

			fn is_generated_message(&self) -> bool {
				(**self).is_generated_message()
			}
		}
	};
}

forward_loggable!(impl<T: Loggable + ?Sized> Loggable for &T);
forward_loggable!(impl<T: Loggable + ?Sized> Loggable for &mut T);
forward_loggable!(impl<T: Loggable + ?Sized> Loggable for Box<T>);
forward_loggable!(impl<T: Loggable + ?Sized> Loggable for Ref<'_, T>);
forward_loggable!(impl<T: Loggable + ?Sized> Loggable for MutexGuard<'_, T>);
forward_loggable!(impl<T: Loggable + ?Sized> Loggable for RwLockReadGuard<'_, T>);

impl<T: Loggable> Loggable for Rc<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Shared {
			id: Rc::as_ptr(self) as *const () as usize,
			target: &**self,
		}
	}
}

impl<T: Loggable> Loggable for Arc<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Shared {
			id: Arc::as_ptr(self) as *const () as usize,
			target: &**self,
		}
	}
}

impl<T: Loggable> Loggable for RefCell<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(GUARDED))
	}

	fn represent(&self) -> Option<Replacement<'_>> {
		let replacement: Replacement<'_> = match self.try_borrow() {
			Ok(guard) => Ok(Box::new(guard)),
			Err(err) => Err(err.to_string().into()),
		};
		Some(replacement)
	}
}

impl<T: Loggable> Loggable for Mutex<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(GUARDED))
	}

	fn represent(&self) -> Option<Replacement<'_>> {
		let replacement: Replacement<'_> = match self.try_lock() {
			Ok(guard) => Ok(Box::new(guard)),
			Err(TryLockError::Poisoned(poisoned)) => Ok(Box::new(poisoned.into_inner())),
			Err(TryLockError::WouldBlock) => Err("mutex is locked".into()),
		};
		Some(replacement)
	}
}

impl<T: Loggable> Loggable for RwLock<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(Cow::Borrowed(GUARDED))
	}

	fn represent(&self) -> Option<Replacement<'_>> {
		let replacement: Replacement<'_> = match self.try_read() {
			Ok(guard) => Ok(Box::new(guard)),
			Err(TryLockError::Poisoned(poisoned)) => Ok(Box::new(poisoned.into_inner())),
			Err(TryLockError::WouldBlock) => Err("rwlock is write-locked".into()),
		};
		Some(replacement)
	}
}

impl<T: Loggable> Loggable for [T] {
	fn shape(&self) -> Shape<'_> {
		Shape::Seq(self.iter().map(|item| item as &dyn Loggable).collect())
	}
}

impl<T: Loggable, const N: usize> Loggable for [T; N] {
	fn shape(&self) -> Shape<'_> {
		self.as_slice().shape()
	}
}

impl<T: Loggable> Loggable for Vec<T> {
	fn shape(&self) -> Shape<'_> {
		self.as_slice().shape()
	}
}

impl<T: Loggable> Loggable for VecDeque<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Seq(self.iter().map(|item| item as &dyn Loggable).collect())
	}
}

impl<K: Display, V: Loggable, S> Loggable for HashMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Assoc(self.iter().map(|(key, value)| (key.to_string(), value as &dyn Loggable)).collect())
	}
}

impl<K: Display, V: Loggable> Loggable for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Assoc(self.iter().map(|(key, value)| (key.to_string(), value as &dyn Loggable)).collect())
	}
}

impl Loggable for Duration {
	fn shape(&self) -> Shape<'_> {
		Shape::Opaque(self)
	}
}

impl Loggable for Path {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self.to_string_lossy())
	}
}

impl Loggable for PathBuf {
	fn shape(&self) -> Shape<'_> {
		Shape::Str(self.to_string_lossy())
	}
}

macro_rules! impl_displayed {
	($($ty:ty),*) => {
		$(impl Loggable for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Opaque(self)
			}

			fn as_display(&self) -> Option<&dyn Display> {
				Some(self)
			}
		})*
	};
}

impl_displayed!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

macro_rules! impl_std_error {
	($($ty:ty),*) => {
		$(impl Loggable for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Opaque(self)
			}

			fn as_error(&self) -> Option<&dyn Error> {
				Some(self)
			}
		})*
	};
}

impl_std_error!(
	std::io::Error,
	std::fmt::Error,
	std::num::ParseIntError,
	std::num::ParseFloatError,
	std::num::TryFromIntError,
	std::str::ParseBoolError,
	std::str::Utf8Error,
	std::string::FromUtf8Error,
	std::net::AddrParseError,
	serde_json::Error
);

/// Boxed and borrowed error trait objects; a [`Wrapped`] behind one keeps its chain.
macro_rules! impl_dyn_error {
	($($ty:ty),*) => {
		$(impl Loggable for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Str(Cow::Owned(self.to_string()))
			}

			fn as_chain(&self) -> Option<&dyn ChainFormatter> {
				self.downcast_ref::<Wrapped>().map(|wrapped| wrapped as &dyn ChainFormatter)
			}

			fn as_error(&self) -> Option<&dyn Error> {
				Some(self)
			}
		})*
	};
}

impl_dyn_error!(dyn Error + 'static, dyn Error + Send + 'static, dyn Error + Send + Sync + 'static);
