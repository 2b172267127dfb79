/// Generate a router async method that selects providers, applies kind filters,
/// and calls a single-provider method through the priority-with-fallback loop.
///
/// Extra arguments must be `Clone`; they are cloned into each provider attempt.
macro_rules! cedola_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $inst_ident:ident : $inst_ty:ty $(, $arg_ident:ident : $arg_ty:ty )* ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident( $call_first:ident $(, $call_rest:ident )* )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "cedola::router",
                skip(self $(, $arg_ident)*),
                fields(symbol = %$inst_ident.symbol()),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no eligible provider succeeds or none support the capability.
        pub async fn $name(
            &self,
            $inst_ident: $inst_ty,
            $( $arg_ident: $arg_ty ),*
        ) -> Result<$ret, cedola_core::CedolaError> {
            self.fetch_single(
                $inst_ident,
                $capability,
                move |c, i| {
                    if !c.supports_kind(*i.kind()) || c.$accessor().is_none() {
                        return None;
                    }
                    $( let $arg_ident = $arg_ident.clone(); )*
                    Some(async move {
                        if let Some(p) = c.$accessor() {
                            p.$call_name(&i $(, $call_rest )*).await
                        } else {
                            Err(cedola_core::CedolaError::connector(
                                c.name(),
                                format!("missing {} capability during call", $capability),
                            ))
                        }
                    })
                },
            )
            .await
        }
    };
}

pub(crate) use cedola_router_method;
