use super::{PathRequest, PathResponse, dispatch};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Answers several requests; the i-th response belongs to the i-th request.
///
/// With the `parallel` feature the requests are spread over the rayon pool,
/// otherwise they run one after another on the calling thread.
pub fn dispatch_batch(requests: &[PathRequest]) -> Vec<PathResponse> {
    #[cfg(feature = "parallel")]
    let responses = requests.par_iter().map(dispatch).collect();

    #[cfg(not(feature = "parallel"))]
    let responses = requests.iter().map(dispatch).collect();

    responses
}
