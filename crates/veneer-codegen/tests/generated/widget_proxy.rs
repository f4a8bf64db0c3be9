// Generated by veneer; do not edit.
// Source interface: crate::ifaces::Widget

/// Generated proxy for `crate::ifaces::Widget`.
pub struct WidgetProxy {
    interceptor: veneer_runtime::InterceptorHandler,
}

static WIDGET_PROXY_TOKENS: &[&[veneer_runtime::MethodToken]] = &[
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Widget", 0),
            "tag_of",
            0,
        ),
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Widget", 0),
            "reset",
            1,
        ),
    ],
];

impl WidgetProxy {
    /// Construct a proxy bound to `interceptor`.
    pub fn new(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        WidgetProxy { interceptor }
    }
}

impl veneer_runtime::ProxyBinding for WidgetProxy {
    const INTERFACE: veneer_runtime::InterfaceToken =
        veneer_runtime::InterfaceToken::new("crate::ifaces", "Widget", 0);

    fn bind(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        Self::new(interceptor)
    }
}

impl crate::ifaces::Widget for WidgetProxy {
    fn tag_of<T: 'static>(&self, prefix: String) -> String {
        let token = &WIDGET_PROXY_TOKENS[0][0];
        let args = vec![
            veneer_runtime::CallValue::new(prefix),
        ];
        let type_args = vec![
            veneer_runtime::TypeArg::of::<T>(),
        ];
        self.interceptor
            .invoke(self, token, args, type_args)
            .take::<String>()
    }

    fn reset(&self) {
        let token = &WIDGET_PROXY_TOKENS[0][1];
        let _ = self.interceptor.invoke(self, token, Vec::new(), Vec::new());
    }
}

impl WidgetProxy {
    pub fn tag_of<T: 'static>(&self, prefix: String) -> String {
        <Self as crate::ifaces::Widget>::tag_of::<T>(self, prefix)
    }

    pub fn reset(&self) {
        <Self as crate::ifaces::Widget>::reset(self)
    }
}

/// Register the generated proxy for `crate::ifaces::Widget`.
pub fn register_widget_proxy() {
    veneer_runtime::global().register::<WidgetProxy>();
}
