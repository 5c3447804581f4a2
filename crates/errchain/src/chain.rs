//! Walking `source()` chains across chain and foreign links.

type StdError = dyn std::error::Error + 'static;

/// Iterator over an error and each of its causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a StdError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a StdError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

pub fn chain(err: &StdError) -> Chain<'_> {
    Chain { next: Some(err) }
}

/// One step down the chain.
pub fn unwrap(err: &StdError) -> Option<&StdError> {
    err.source()
}

/// The innermost error of the chain; `err` itself if it has no cause.
pub fn root_cause(err: &StdError) -> &StdError {
    chain(err).last().unwrap_or(err)
}

/// The first link of type `T`.
pub fn find<T: std::error::Error + 'static>(err: &StdError) -> Option<&T> {
    chain(err).find_map(|link| link.downcast_ref::<T>())
}

/// Whether some link of type `T` equals `target`.
pub fn is<T>(err: &StdError, target: &T) -> bool
where
    T: std::error::Error + PartialEq + 'static,
{
    chain(err).any(|link| link.downcast_ref::<T>() == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainError;

    #[derive(Debug, PartialEq)]
    struct Timeout {
        secs: u32,
    }

    impl std::fmt::Display for Timeout {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "timed out after {}s", self.secs)
        }
    }

    impl std::error::Error for Timeout {}

    fn sample() -> ChainError {
        let err = ChainError::wrap(Timeout { secs: 30 }, "failed to connect");
        ChainError::wrap(err, "failed to start")
    }

    #[test]
    fn test_chain_order() {
        let err = sample();
        let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "failed to start: failed to connect: timed out after 30s",
                "failed to connect: timed out after 30s",
                "timed out after 30s",
            ]
        );
    }

    #[test]
    fn test_root_cause_and_unwrap() {
        let err = sample();
        assert_eq!(root_cause(&err).to_string(), "timed out after 30s");
        let next = unwrap(&err).and_then(|e| e.downcast_ref::<ChainError>());
        assert_eq!(next.map(ChainError::message), Some("failed to connect"));

        let alone = Timeout { secs: 1 };
        assert!(unwrap(&alone).is_none());
        assert_eq!(root_cause(&alone).to_string(), "timed out after 1s");
    }

    #[test]
    fn test_find_and_is() {
        let err = sample();
        assert_eq!(find::<Timeout>(&err), Some(&Timeout { secs: 30 }));
        assert!(find::<std::io::Error>(&err).is_none());
        assert!(is(&err, &Timeout { secs: 30 }));
        assert!(!is(&err, &Timeout { secs: 5 }));
    }
}
