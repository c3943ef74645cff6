/// Generate one `#[test]` per backend feature for each listed function.
///
/// Each function has the signature `async fn(&mut HarnessTest)`.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        #[cfg(feature = "memory")]
        mod memory {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::HarnessTest::new(
                        Box::new($crate::db::memory::SetupMemory::new())
                    );

                    test.run_test(move |test| Box::pin(async move {
                        super::$f(test).await;
                    }));
                }
            )*
        }

        #[cfg(feature = "emulator")]
        mod emulator {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::HarnessTest::new(
                        Box::new($crate::db::emulator::SetupEmulator::new())
                    );

                    test.run_test(move |test| Box::pin(async move {
                        super::$f(test).await;
                    }));
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
