#[cfg(test)]
mod tests {
    use npm_math::prelude::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use rstest::rstest;

    fn int(value: i64) -> BigInt {
        let magnitude = BigInt::from_u64(value.unsigned_abs()).unwrap();
        if value < 0 {
            magnitude.neg().unwrap()
        } else {
            magnitude
        }
    }

    fn random_int(rng: &mut StdRng, bytes: usize) -> BigInt {
        let mut buf = vec![0u8; bytes];
        rng.fill_bytes(&mut buf);
        let value = BigInt::from_be_bytes(&buf).unwrap();
        if rng.next_u32() & 1 == 1 {
            value.neg().unwrap()
        } else {
            value
        }
    }

    /// Yields consecutive counter values, big-endian and left-padded to the requested length
    struct CounterSource {
        next: u64,
    }

    impl ByteSource for CounterSource {
        fn read(&mut self, dest: &mut [u8]) -> usize {
            let counter = self.next.to_be_bytes();
            let width = dest.len().min(counter.len());
            let pad = dest.len() - width;
            dest[..pad].fill(0);
            dest[pad..].copy_from_slice(&counter[counter.len() - width..]);
            self.next = self.next.wrapping_add(1);
            dest.len()
        }
    }

    #[test]
    fn big_endian_round_trip() {
        npm_logging::setup_log();
        let value = BigInt::from_be_bytes(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(value, int(66051));
        assert_eq!(int(0x010203).to_be_bytes(), vec![0x01, 0x02, 0x03]);

        let mut rng = StdRng::seed_from_u64(7);
        for len in [1usize, 3, 4, 5, 16, 31, 64, 512] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            let value = BigInt::from_be_bytes(&bytes).unwrap();
            assert_eq!(value.to_be_bytes_padded(len).unwrap(), bytes);
            let reloaded = BigInt::from_be_bytes(&value.to_be_bytes()).unwrap();
            assert_eq!(reloaded, value);
        }
    }

    #[test]
    fn carry_into_new_digit() {
        npm_logging::setup_log();
        let sum = BigInt::from_digit(u32::MAX).unwrap().add(&int(1)).unwrap();
        assert_eq!(sum.digits(), &[0, 1]);
        assert_eq!(sum, int(1 << 32));
    }

    #[test]
    fn ring_laws() {
        npm_logging::setup_log();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let one = int(1);

        for _ in 0..50 {
            let a = random_int(&mut rng, 24);
            let b = random_int(&mut rng, 17);
            let c = random_int(&mut rng, 9);

            assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
            assert_eq!(
                a.add(&b).unwrap().add(&c).unwrap(),
                a.add(&b.add(&c).unwrap()).unwrap()
            );
            assert_eq!(a.mul(&one).unwrap(), a);
            assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
            assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
            assert_eq!(
                a.mul(&b.add(&c).unwrap()).unwrap(),
                a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap()
            );
        }
    }

    #[rstest]
    #[case(100, 7)]
    #[case(-100, 7)]
    #[case(100, -7)]
    #[case(-100, -7)]
    #[case(6, 3)]
    #[case(3, 6)]
    #[case(0, 5)]
    #[case(i64::MAX, 3)]
    #[case(i64::MIN + 1, 0x1_0000_0001)]
    fn division_identity(#[case] a: i64, #[case] b: i64) {
        npm_logging::setup_log();
        let (a, b) = (int(a), int(b));
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
        assert_eq!(r.cmp_mag(&b), std::cmp::Ordering::Less);

        let m = a.modulo(&b).unwrap();
        assert_eq!(m.cmp_mag(&b), std::cmp::Ordering::Less);
        assert!(m.is_zero() || m.is_negative() == b.is_negative());
        // a - m is a multiple of b
        assert!(a.sub(&m).unwrap().modulo(&b).unwrap().is_zero());
    }

    #[test]
    fn division_identity_random() {
        npm_logging::setup_log();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..25 {
            let a = random_int(&mut rng, 40);
            let b = random_int(&mut rng, 13);
            if b.is_zero() {
                continue;
            }

            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
            assert_eq!(r.cmp_mag(&b), std::cmp::Ordering::Less);
            assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }

    #[test]
    fn division_by_zero() {
        npm_logging::setup_log();
        assert_eq!(int(5).div_rem(&int(0)).err(), Some(MathError::DivisionByZero));
    }

    #[rstest]
    #[case(48, 18, 6, 144)]
    #[case(18, 48, 6, 144)]
    #[case(17, 5, 1, 85)]
    #[case(1 << 20, 1 << 12, 1 << 12, 1 << 20)]
    #[case(-48, 18, 6, 144)]
    fn gcd_lcm(#[case] a: i64, #[case] b: i64, #[case] gcd: i64, #[case] lcm: i64) {
        npm_logging::setup_log();
        let (a, b) = (int(a), int(b));
        assert_eq!(a.gcd(&b).unwrap(), int(gcd));
        assert_eq!(a.lcm(&b).unwrap(), int(lcm));
    }

    #[test]
    fn gcd_times_lcm_is_product() {
        npm_logging::setup_log();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let shared = random_int(&mut rng, 6).abs().unwrap();
            let a = random_int(&mut rng, 10).abs().unwrap().mul(&shared).unwrap();
            let b = random_int(&mut rng, 8).abs().unwrap().mul(&shared).unwrap();
            if a.is_zero() || b.is_zero() {
                continue;
            }

            let product = a.gcd(&b).unwrap().mul(&a.lcm(&b).unwrap()).unwrap();
            assert_eq!(product, a.mul(&b).unwrap());
        }

        assert_eq!(int(-21).gcd(&int(0)).unwrap(), int(21));
    }

    #[test]
    fn modular_inverse() {
        npm_logging::setup_log();
        assert_eq!(int(3).invmod(&int(11)).unwrap(), int(4));
        assert_eq!(int(3).mulmod(&int(4), &int(11)).unwrap(), int(1));
        assert_eq!(int(2).invmod(&int(4)).err(), Some(MathError::NoInverse));
        assert!(matches!(
            int(2).invmod(&int(1)),
            Err(MathError::InvalidArgument(_))
        ));

        // 2^127 - 1 is prime, so every residue in range has an inverse
        let modulus = int(1).mul_2d(127).unwrap().sub(&int(1)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let a = random_int(&mut rng, 15);
            if a.is_zero() {
                continue;
            }
            let inverse = a.invmod(&modulus).unwrap();
            assert!(!inverse.is_negative());
            assert_eq!(inverse.cmp_mag(&modulus), std::cmp::Ordering::Less);
            assert_eq!(a.mulmod(&inverse, &modulus).unwrap(), int(1));
        }
    }

    #[rstest]
    #[case(2, true)]
    #[case(3, true)]
    #[case(5, true)]
    #[case(1619, true)]
    #[case(1621, true)]
    #[case(32771, true)]
    #[case(65537, true)]
    #[case(2_147_483_647, true)]
    #[case(0, false)]
    #[case(1, false)]
    #[case(4, false)]
    #[case(6, false)]
    #[case(561, false)]
    #[case(1_299_709 * 1_299_721, false)]
    #[case(-7, false)]
    fn primality(#[case] n: i64, #[case] expected: bool) {
        npm_logging::setup_log();
        assert_eq!(is_prime(&int(n), 40).unwrap(), expected);
    }

    #[test]
    fn primality_of_large_values() {
        npm_logging::setup_log();
        // 2^127 - 1 (Mersenne prime) and 2^128 + 1 (composite)
        let mersenne = int(1).mul_2d(127).unwrap().sub(&int(1)).unwrap();
        assert!(is_prime(&mersenne, 16).unwrap());

        let fermat = int(1).mul_2d(128).unwrap().add(&int(1)).unwrap();
        assert!(!is_prime(&fermat, 16).unwrap());

        // a product of two 64-bit primes passes trial division but not Miller–Rabin
        let p = int(1).mul_2d(64).unwrap().sub(&int(59)).unwrap();
        let q = int(1).mul_2d(61).unwrap().sub(&int(1)).unwrap();
        assert!(!is_prime(&p.mul(&q).unwrap(), 8).unwrap());
        assert!(!is_divisible(&p.mul(&q).unwrap()).unwrap());
    }

    #[test]
    fn primality_round_bounds() {
        npm_logging::setup_log();
        for rounds in [0, PRIME_TABLE_SIZE + 1] {
            assert!(matches!(
                is_prime(&int(97), rounds),
                Err(MathError::InvalidArgument(_))
            ));
        }
        assert!(is_prime(&int(97), PRIME_TABLE_SIZE).unwrap());
    }

    #[rstest]
    #[case(ParityClass::Odd)]
    #[case(ParityClass::OddSecondBit)]
    fn random_prime_from_counter(#[case] parity: ParityClass) {
        npm_logging::setup_log();
        let mut source = CounterSource { next: 0 };
        let prime = rand_prime(2, parity, &mut source).unwrap();

        assert!(prime >= int(0xC001));
        assert!(prime <= int(0xFFFF));
        assert!(prime.is_odd());
        if parity == ParityClass::OddSecondBit {
            assert_eq!(prime.mod_digit(4).unwrap(), 3);
        }
        assert!(is_prime(&prime, 40).unwrap());
    }

    #[test]
    fn random_prime_from_rng() {
        npm_logging::setup_log();
        let mut source = RngSource::new(StdRng::seed_from_u64(2024));
        let prime = PrimeGenerator::new(16)
            .parity(ParityClass::OddSecondBit)
            .rounds(20)
            .generate(&mut source)
            .unwrap();

        assert_eq!(prime.unsigned_bin_size(), 16);
        assert_eq!(prime.count_bits(), 128);
        assert!(prime.test_bit(126));
        assert!(is_prime(&prime, 40).unwrap());
    }

    fn make_prime(len: usize) -> Result<BigInt, MathError> {
        let mut source = RngSource::new(rand::rngs::OsRng);
        let p = rand_prime(len, ParityClass::OddSecondBit, &mut source)?;
        assert!(is_prime(&p, DEFAULT_PRIME_ROUNDS)?);
        Ok(p)
    }

    #[test]
    fn random_prime_from_os_rng() {
        npm_logging::setup_log();
        let prime = make_prime(16).unwrap();
        assert_eq!(prime.unsigned_bin_size(), 16);
        assert_eq!(prime.mod_digit(4).unwrap(), 3);
    }

    #[test]
    fn random_prime_attempt_bound() {
        npm_logging::setup_log();
        let mut source = RngSource::new(StdRng::seed_from_u64(1));
        let result = PrimeGenerator::new(64)
            .max_attempts(Some(0))
            .generate(&mut source);
        assert_eq!(result.err(), Some(MathError::AttemptsExhausted(0)));
    }

    #[test]
    fn growth_keeps_digits() {
        npm_logging::setup_log();
        let mut value = int(0x7766_5544_3322_1100);
        let before = value.digits().to_vec();
        for size in [40, 41, 96, 300, 1024] {
            value.grow(size).unwrap();
            assert!(value.capacity() >= size);
            assert_eq!(value.digits(), &before[..]);
            value.shl_bits_assign(0).unwrap();
            assert_eq!(value.used(), 2);
        }

        // digits appearing past the old length must read as zero
        value.lshd(3).unwrap();
        assert_eq!(value.digits()[..3], [0, 0, 0]);
        value.rshd(3);
        assert_eq!(value.digits(), &before[..]);
    }
}
