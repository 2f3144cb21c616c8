use rayon::prelude::*;
use thiserror::Error;

use fieldmorph_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// Input and output sizes do not match.
    #[error("source and destination images must have the same size")]
    SizeMismatch,
}

/// Controls how parallel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool, one task per image row.
    ///
    /// The global pool is sized to the available hardware parallelism.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Run several operations inside one [`install`] to share a single pool.
    Fixed(usize),
}

/// Run `op` under the given strategy.
///
/// For [`ExecutionStrategy::Fixed`] a single pool is built and `op` runs inside
/// it with [`ExecutionStrategy::ParallelRows`], so every parallel loop `op`
/// starts with that strategy shares the pool. The other strategies are passed
/// through unchanged.
///
/// # Errors
///
/// * [`ParallelError::InvalidThreadCount`] for `Fixed(0)`.
/// * [`ParallelError::BuildError`] if the pool cannot be built.
pub fn install<R: Send>(
    strategy: ExecutionStrategy,
    op: impl FnOnce(ExecutionStrategy) -> R + Send,
) -> Result<R, ParallelError> {
    match strategy {
        ExecutionStrategy::Serial | ExecutionStrategy::ParallelRows => Ok(op(strategy)),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;
            Ok(pool.install(|| op(ExecutionStrategy::ParallelRows)))
        }
    }
}

/// Fill every pixel of `dst` from its coordinates, stopping at the first error.
///
/// The closure receives `(x, y, pixel)` where `pixel` holds the `C` channels
/// of the destination pixel. Rows are independent units of work; all rows are
/// written before this function returns.
pub fn try_par_iter_pixels<T, const C: usize, E>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) -> Result<(), E> + Send + Sync,
) -> Result<(), E>
where
    T: Send,
    E: From<ParallelError> + Send,
{
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    let row_len = C * dst.cols();
    let row_op = |(y, row): (usize, &mut [T])| -> Result<(), E> {
        row.chunks_exact_mut(C)
            .enumerate()
            .try_for_each(|(x, pixel)| f(x, y, pixel))
    };

    let dst_slice = dst.as_slice_mut();
    install(strategy, |strategy| {
        if strategy != ExecutionStrategy::Serial {
            dst_slice
                .par_chunks_exact_mut(row_len)
                .enumerate()
                .try_for_each(&row_op)
        } else {
            dst_slice
                .chunks_exact_mut(row_len)
                .enumerate()
                .try_for_each(&row_op)
        }
    })?
}

/// Apply a function to each channel value of two images in parallel.
///
/// # Errors
///
/// [`ParallelError::SizeMismatch`] if the three images do not share the same size.
pub fn par_iter_rows_val_two<T1, T2, T3, const C: usize>(
    src1: &Image<T1, C>,
    src2: &Image<T2, C>,
    dst: &mut Image<T3, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) -> Result<(), ParallelError>
where
    T1: Sync,
    T2: Sync,
    T3: Send,
{
    if src1.size() != src2.size() || src1.size() != dst.size() {
        return Err(ParallelError::SizeMismatch);
    }
    if dst.as_slice().is_empty() {
        return Ok(());
    }

    let row_len = C * dst.cols();
    let row_op = |((src1_row, src2_row), dst_row): ((&[T1], &[T2]), &mut [T3])| {
        src1_row
            .iter()
            .zip(src2_row.iter())
            .zip(dst_row.iter_mut())
            .for_each(|((a, b), out)| f(a, b, out));
    };

    let (src1_slice, src2_slice) = (src1.as_slice(), src2.as_slice());
    let dst_slice = dst.as_slice_mut();
    install(strategy, |strategy| {
        if strategy != ExecutionStrategy::Serial {
            src1_slice
                .par_chunks_exact(row_len)
                .zip(src2_slice.par_chunks_exact(row_len))
                .zip(dst_slice.par_chunks_exact_mut(row_len))
                .for_each(&row_op);
        } else {
            src1_slice
                .chunks_exact(row_len)
                .zip(src2_slice.chunks_exact(row_len))
                .zip(dst_slice.chunks_exact_mut(row_len))
                .for_each(&row_op);
        }
    })
}
