pub mod configuration;
pub mod configurationerror;

pub mod contour {
    pub mod samplingpolicy;
    pub mod contourintegral;
    pub mod strokerecorder;
}

pub mod curve {
    pub mod curveerror;
    pub mod curve;
    pub mod segment;
    pub mod bezier;
    pub mod splinecurve;

    pub mod catmullrom {
        pub mod parametrization;
        pub mod catmullrom;
    }
}

pub mod function {
    pub mod analyticfunction;
    pub mod registryerror;
    pub mod wellknownfunctions;
    pub mod functionregistry;
}

pub mod math {
    pub mod complex {
        pub mod complex;
        pub mod transcendental;
    }
    pub mod jet {
        pub mod scalar;
        pub mod jet;
    }
    pub mod integrate;
}

pub mod transform {
    pub mod transformerror;
    pub mod affinetransform;
}
