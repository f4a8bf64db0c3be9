// Generated by veneer; do not edit.
// Source interface: crate::ifaces::Derived

/// Generated proxy for `crate::ifaces::Derived`.
pub struct DerivedProxy {
    interceptor: veneer_runtime::InterceptorHandler,
}

static DERIVED_PROXY_TOKENS: &[&[veneer_runtime::MethodToken]] = &[
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Derived", 0),
            "extra",
            0,
        ),
    ],
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Base", 0),
            "base_method",
            0,
        ),
    ],
];

impl DerivedProxy {
    /// Construct a proxy bound to `interceptor`.
    pub fn new(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        DerivedProxy { interceptor }
    }
}

impl veneer_runtime::ProxyBinding for DerivedProxy {
    const INTERFACE: veneer_runtime::InterfaceToken =
        veneer_runtime::InterfaceToken::new("crate::ifaces", "Derived", 0);

    fn bind(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        Self::new(interceptor)
    }
}

impl crate::ifaces::Derived for DerivedProxy {
    fn extra(&self, n: i32) -> i32 {
        let token = &DERIVED_PROXY_TOKENS[0][0];
        let args = vec![
            veneer_runtime::CallValue::new(n),
        ];
        self.interceptor
            .invoke(self, token, args, Vec::new())
            .take::<i32>()
    }
}

impl crate::ifaces::Base for DerivedProxy {
    fn base_method(&self, tag: String) -> String {
        let token = &DERIVED_PROXY_TOKENS[1][0];
        let args = vec![
            veneer_runtime::CallValue::new(tag),
        ];
        self.interceptor
            .invoke(self, token, args, Vec::new())
            .take::<String>()
    }
}

impl DerivedProxy {
    pub fn extra(&self, n: i32) -> i32 {
        <Self as crate::ifaces::Derived>::extra(self, n)
    }

    pub fn base_method(&self, tag: String) -> String {
        <Self as crate::ifaces::Base>::base_method(self, tag)
    }
}

/// Register the generated proxy for `crate::ifaces::Derived`.
pub fn register_derived_proxy() {
    veneer_runtime::global().register::<DerivedProxy>();
}
