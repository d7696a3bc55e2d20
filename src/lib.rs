pub mod configuration;

pub mod circular {
    pub mod circularunit;
    pub mod circularsample;
}

pub mod density {
    pub mod circulardensityestimator;
    pub mod vonmiseskerneldensity;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod sampledcurve;
        }
    }
    pub mod bessel;
    pub mod quadrature;
    pub mod statistics;
}

pub mod overlap {
    pub mod overlaperror;
    pub mod overlaptriple;
    pub mod circularoverlap;
    pub mod hourlyoverlap;
    pub mod communityoverlap;
}
