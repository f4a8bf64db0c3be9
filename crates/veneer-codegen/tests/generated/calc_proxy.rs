// Generated by veneer; do not edit.
// Source interface: crate::ifaces::Calc

/// Generated proxy for `crate::ifaces::Calc`.
pub struct CalcProxy {
    interceptor: veneer_runtime::InterceptorHandler,
}

static CALC_PROXY_TOKENS: &[&[veneer_runtime::MethodToken]] = &[
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Calc", 0),
            "add5_to",
            0,
        ),
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Calc", 0),
            "get_str",
            1,
        ),
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Calc", 0),
            "reset",
            2,
        ),
    ],
];

impl CalcProxy {
    /// Construct a proxy bound to `interceptor`.
    pub fn new(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        CalcProxy { interceptor }
    }
}

impl veneer_runtime::ProxyBinding for CalcProxy {
    const INTERFACE: veneer_runtime::InterfaceToken =
        veneer_runtime::InterfaceToken::new("crate::ifaces", "Calc", 0);

    fn bind(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        Self::new(interceptor)
    }
}

impl crate::ifaces::Calc for CalcProxy {
    fn add5_to(&self, start_val: i32) -> i32 {
        let token = &CALC_PROXY_TOKENS[0][0];
        let args = vec![
            veneer_runtime::CallValue::new(start_val),
        ];
        self.interceptor
            .invoke(self, token, args, Vec::new())
            .take::<i32>()
    }

    fn get_str(&self, source: String) -> String {
        let token = &CALC_PROXY_TOKENS[0][1];
        let args = vec![
            veneer_runtime::CallValue::new(source),
        ];
        self.interceptor
            .invoke(self, token, args, Vec::new())
            .take::<String>()
    }

    fn reset(&self) {
        let token = &CALC_PROXY_TOKENS[0][2];
        let _ = self.interceptor.invoke(self, token, Vec::new(), Vec::new());
    }
}

impl CalcProxy {
    pub fn add5_to(&self, start_val: i32) -> i32 {
        <Self as crate::ifaces::Calc>::add5_to(self, start_val)
    }

    pub fn get_str(&self, source: String) -> String {
        <Self as crate::ifaces::Calc>::get_str(self, source)
    }

    pub fn reset(&self) {
        <Self as crate::ifaces::Calc>::reset(self)
    }
}

/// Register the generated proxy for `crate::ifaces::Calc`.
pub fn register_calc_proxy() {
    veneer_runtime::global().register::<CalcProxy>();
}
