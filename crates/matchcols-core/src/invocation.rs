//! Invocation protocol: arity check, aggregation, single delivery.

use tracing::{trace, warn};

use crate::aggregate::aggregate;
use crate::constants::{EXPECTED_ARG_COUNT, FUNCTION_NAME};
use crate::errors::{InvocationError, MatchColsErrorCode};
use crate::traits::{MatchContext, ResultSink};

/// Reject any call that passes arguments.
pub fn check_arity(actual: usize) -> Result<(), InvocationError> {
    if actual == EXPECTED_ARG_COUNT {
        Ok(())
    } else {
        Err(InvocationError::WrongArgumentCount {
            function: FUNCTION_NAME,
            expected: EXPECTED_ARG_COUNT,
            actual,
        })
    }
}

/// Evaluate one call. Aggregation never starts when the arity is wrong.
pub fn evaluate<C>(ctx: &C, arg_count: usize) -> Result<String, InvocationError>
where
    C: MatchContext + ?Sized,
{
    check_arity(arg_count)?;
    let text = aggregate(ctx)?;
    trace!(
        columns = ctx.column_count(),
        phrases = ctx.phrase_count(),
        bytes = text.len(),
        "matched columns evaluated"
    );
    Ok(text)
}

/// Hand the outcome to exactly one sink method.
pub fn deliver<S>(sink: &mut S, outcome: Result<String, InvocationError>)
where
    S: ResultSink + ?Sized,
{
    match outcome {
        Ok(text) => sink.text(&text),
        Err(err) => {
            warn!(
                function = FUNCTION_NAME,
                code = err.error_code(),
                error = %err,
                "auxiliary function failed"
            );
            sink.error(&err);
        }
    }
}
