//! Miscellaneous helper macros.

/// Construct a [`num_complex::Complex64`] from a real (and optionally an
/// imaginary) part.
#[macro_export]
macro_rules! c {
    ( $re:expr ) => {
        num_complex::Complex64::new($re, 0.0)
    };
    ( $re:expr, $im:expr ) => {
        num_complex::Complex64::new($re, $im)
    };
}

/// Create a directory and all missing parents, panicking on failure.
#[macro_export]
macro_rules! mkdir {
    ( $dir:expr ) => {
        std::fs::create_dir_all(&$dir)
            .unwrap_or_else(|err| {
                panic!("couldn't create directory {:?}: {}", $dir, err)
            })
    }
}

/// Write a collection of arrays to a NumPy `.npz` archive, panicking on
/// failure.
///
/// ```ignore
/// write_npz!(
///     outdir.join("levels.npz"),
///     arrays: {
///         "B" => &B,
///         "e_gnd" => &e_gnd,
///     }
/// );
/// ```
#[macro_export]
macro_rules! write_npz {
    (
        $path:expr,
        arrays: { $( $name:expr => $arr:expr ),+ $(,)? } $(,)?
    ) => {
        {
            let mut npz
                = ndarray_npy::NpzWriter::new(
                    std::fs::File::create(&$path)
                        .unwrap_or_else(|err| {
                            panic!(
                                "couldn't create file {:?}: {}", $path, err)
                        })
                );
            $(
                npz.add_array($name, $arr)
                    .unwrap_or_else(|err| {
                        panic!("couldn't write array '{}': {}", $name, err)
                    });
            )+
            npz.finish()
                .unwrap_or_else(|err| {
                    panic!("couldn't finish npz file {:?}: {}", $path, err)
                });
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn complex_literals() {
        let z = c!(1.0);
        assert_eq!(z, num_complex::Complex64::new(1.0, 0.0));
        let w = c!(0.0, -2.5);
        assert_eq!(w, num_complex::Complex64::new(0.0, -2.5));
    }
}
