// Generated by veneer; do not edit.
// Source interface: crate::ifaces::Svc

/// Generated proxy for `crate::ifaces::Svc`.
pub struct SvcProxy {
    interceptor: veneer_runtime::InterceptorHandler,
}

static SVC_PROXY_TOKENS: &[&[veneer_runtime::MethodToken]] = &[
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "A", 0),
            "ping",
            0,
        ),
    ],
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "B", 0),
            "ping",
            0,
        ),
    ],
];

impl SvcProxy {
    /// Construct a proxy bound to `interceptor`.
    pub fn new(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        SvcProxy { interceptor }
    }
}

impl veneer_runtime::ProxyBinding for SvcProxy {
    const INTERFACE: veneer_runtime::InterfaceToken =
        veneer_runtime::InterfaceToken::new("crate::ifaces", "Svc", 0);

    fn bind(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        Self::new(interceptor)
    }
}

impl crate::ifaces::Svc for SvcProxy {
}

impl crate::ifaces::A for SvcProxy {
    fn ping(&self) -> String {
        let token = &SVC_PROXY_TOKENS[0][0];
        self.interceptor
            .invoke(self, token, Vec::new(), Vec::new())
            .take::<String>()
    }
}

impl crate::ifaces::B for SvcProxy {
    fn ping(&self) -> String {
        let token = &SVC_PROXY_TOKENS[1][0];
        self.interceptor
            .invoke(self, token, Vec::new(), Vec::new())
            .take::<String>()
    }
}

impl SvcProxy {
    pub fn ping(&self) -> String {
        <Self as crate::ifaces::A>::ping(self)
    }
}

/// Register the generated proxy for `crate::ifaces::Svc`.
pub fn register_svc_proxy() {
    veneer_runtime::global().register::<SvcProxy>();
}
