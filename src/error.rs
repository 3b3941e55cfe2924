use core::fmt;

/// The error type of the parallel sorting methods.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
	/// A parallel sort was requested with less than two workers.
	InvalidArgument {
		/// The rejected worker count.
		workers: usize,
	},
	/// The dedicated worker pool could not be spawned.
	#[cfg(feature = "rayon")]
	ThreadPool(rayon::ThreadPoolBuildError),
}

/// Result type of the parallel sorting methods.
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidArgument { workers } => {
				write!(f, "workers must be > 1, got {workers}")
			}
			#[cfg(feature = "rayon")]
			Self::ThreadPool(err) => write!(f, "cannot build worker pool: {err}"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::InvalidArgument { .. } => None,
			#[cfg(feature = "rayon")]
			Self::ThreadPool(err) => Some(err),
		}
	}
}

#[cfg(feature = "rayon")]
impl From<rayon::ThreadPoolBuildError> for Error {
	fn from(err: rayon::ThreadPoolBuildError) -> Self {
		Self::ThreadPool(err)
	}
}
